use super::model::{compare_by, MovieDataset, SortKey};

// ---------------------------------------------------------------------------
// Sort history: accumulated (column, direction) pairs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEntry {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Ordered record of the user's header clicks, unique by column. Re-clicking
/// a column flips its direction in place without moving it.
#[derive(Debug, Clone, Default)]
pub struct SortHistory {
    entries: Vec<SortEntry>,
}

impl SortHistory {
    /// Register a header click: flip an existing entry's direction in place,
    /// or append a new ascending entry.
    pub fn toggle(&mut self, key: SortKey) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.direction = entry.direction.toggled(),
            None => self.entries.push(SortEntry {
                key,
                direction: SortDirection::Asc,
            }),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Current direction for a column, if it has been clicked.
    pub fn direction_of(&self, key: SortKey) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.direction)
    }
}

// ---------------------------------------------------------------------------
// Applying the history
// ---------------------------------------------------------------------------

/// Order `indices` by the accumulated history: one whole-sequence stable
/// sort per entry, in sequence order. The last entry therefore dominates the
/// final order; earlier entries survive only as tie-breaks through the
/// stability of each pass. An empty history leaves `indices` untouched.
pub fn apply_sort(dataset: &MovieDataset, indices: &mut [usize], history: &SortHistory) {
    for entry in history.entries() {
        indices.sort_by(|&ia, &ib| {
            let ord = compare_by(&dataset.movies[ia], &dataset.movies[ib], entry.key);
            match entry.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{BoxOffice, Movie};

    fn movie(
        id: i64,
        title: &str,
        year: i32,
        director: &str,
        gross: BoxOffice,
        country: &str,
    ) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            release_year: year,
            director: director.to_string(),
            box_office: gross,
            country: country.to_string(),
        }
    }

    fn two_movies() -> MovieDataset {
        MovieDataset::from_movies(vec![
            movie(1, "A", 2000, "X", BoxOffice::Number(100.0), "US"),
            movie(2, "B", 2010, "Y", BoxOffice::Number(50.0), "FR"),
        ])
    }

    #[test]
    fn empty_history_is_identity() {
        let ds = two_movies();
        let mut indices = vec![1, 0];
        apply_sort(&ds, &mut indices, &SortHistory::default());
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn toggle_appends_then_flips_in_place() {
        let mut history = SortHistory::default();
        history.toggle(SortKey::BoxOffice);
        assert_eq!(
            history.entries(),
            &[SortEntry {
                key: SortKey::BoxOffice,
                direction: SortDirection::Asc
            }]
        );

        history.toggle(SortKey::Title);
        history.toggle(SortKey::BoxOffice);
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.entries()[0].key, SortKey::BoxOffice);
        assert_eq!(history.entries()[0].direction, SortDirection::Desc);
        assert_eq!(history.entries()[1].key, SortKey::Title);
    }

    #[test]
    fn double_click_sorts_descending() {
        let ds = two_movies();
        let mut history = SortHistory::default();
        history.toggle(SortKey::BoxOffice);
        history.toggle(SortKey::BoxOffice);

        let mut indices = vec![0, 1];
        apply_sort(&ds, &mut indices, &history);
        // 100 before 50
        assert_eq!(indices, vec![0, 1]);

        let mut indices = vec![1, 0];
        apply_sort(&ds, &mut indices, &history);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn last_history_entry_dominates() {
        let ds = MovieDataset::from_movies(vec![
            movie(1, "A", 2010, "X", BoxOffice::Number(100.0), "US"),
            movie(2, "B", 2000, "Y", BoxOffice::Number(50.0), "FR"),
        ]);
        let mut history = SortHistory::default();
        history.toggle(SortKey::ReleaseYear);
        history.toggle(SortKey::Director);

        let mut indices = vec![0, 1];
        apply_sort(&ds, &mut indices, &history);
        // Year order would put id 2 first; the later director sort wins.
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn earlier_entries_break_ties_through_stability() {
        let ds = MovieDataset::from_movies(vec![
            movie(1, "C", 2010, "X", BoxOffice::Number(1.0), "US"),
            movie(2, "A", 2000, "X", BoxOffice::Number(2.0), "US"),
            movie(3, "B", 2005, "Y", BoxOffice::Number(3.0), "US"),
        ]);
        let mut history = SortHistory::default();
        history.toggle(SortKey::Title);
        history.toggle(SortKey::Director);

        let mut indices = vec![0, 1, 2];
        apply_sort(&ds, &mut indices, &history);
        // Director groups X before Y; within X the earlier title sort holds.
        assert_eq!(indices, vec![1, 0, 2]);
    }
}
