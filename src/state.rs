use crate::data::filter::{filtered_indices, FilterControls, FilterCriteria};
use crate::data::model::{MovieDataset, SortKey};
use crate::data::sort::{apply_sort, SortHistory};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is the single source of truth; `view` is always derivable as
/// the applied criteria's filter output re-ordered by the sort history.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<MovieDataset>,

    /// Last filter snapshot the user applied.
    pub applied: FilterCriteria,

    /// In-progress filter panel edits; touch the view only on Apply.
    pub controls: FilterControls,

    /// Accumulated header clicks driving the multi-column sort.
    pub sort_history: SortHistory,

    /// Filter output, in original dataset order (cached).
    filtered: Vec<usize>,

    /// The derived view: `filtered` re-ordered by the sort history.
    view: Vec<usize>,

    /// Whether the filter side panel is open.
    pub filter_panel_open: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            applied: FilterCriteria::default(),
            controls: FilterControls::default(),
            sort_history: SortHistory::default(),
            filtered: Vec::new(),
            view: Vec::new(),
            filter_panel_open: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: criteria reset to match-all, sort
    /// history cleared, every row visible.
    pub fn set_dataset(&mut self, dataset: MovieDataset) {
        self.applied = FilterCriteria::match_all(&dataset);
        self.controls = FilterControls::revert(&self.applied);
        self.sort_history.clear();
        self.filtered = (0..dataset.len()).collect();
        self.view = self.filtered.clone();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Indices into the dataset's movies, filtered and sorted. Empty when
    /// nothing is loaded or every row is filtered out.
    pub fn derived_view(&self) -> &[usize] {
        &self.view
    }

    /// Commit the panel edits and recompute the view from the original
    /// dataset, re-applying the accumulated sort history.
    pub fn apply_filters(&mut self) {
        self.applied = self.controls.commit();
        self.controls = FilterControls::revert(&self.applied);
        self.refilter();
    }

    /// Discard unsaved panel edits, restoring the applied snapshot.
    pub fn discard_edits(&mut self) {
        self.controls = FilterControls::revert(&self.applied);
    }

    /// Recompute the filter output and re-sort it.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filtered = filtered_indices(ds, &self.applied);
        }
        self.resort();
    }

    /// Header click: toggle the column in the history and re-sort the
    /// already-filtered subset only.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort_history.toggle(key);
        self.resort();
    }

    /// Clear the sort history; the view falls back to the filtered order.
    pub fn reset_sort(&mut self) {
        self.sort_history.clear();
        self.view = self.filtered.clone();
    }

    fn resort(&mut self) {
        self.view = self.filtered.clone();
        if let Some(ds) = &self.dataset {
            apply_sort(ds, &mut self.view, &self.sort_history);
        }
    }
}
