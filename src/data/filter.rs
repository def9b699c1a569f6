use std::collections::BTreeSet;

use super::model::MovieDataset;

// ---------------------------------------------------------------------------
// FilterCriteria – the applied filter snapshot
// ---------------------------------------------------------------------------

/// The committed filter snapshot. Replaced atomically when the user applies
/// the filter panel; in-progress edits live in [`FilterControls`] and do not
/// affect the view until committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Year bounds are mandatory, defaulted to the dataset's range.
    pub min_year: i32,
    pub max_year: i32,
    /// `None` = unbounded.
    pub min_box_office: Option<f64>,
    pub max_box_office: Option<f64>,
    /// Empty set = no restriction on that dimension (match all).
    pub titles: BTreeSet<String>,
    pub directors: BTreeSet<String>,
    pub countries: BTreeSet<String>,
}

impl FilterCriteria {
    /// A criteria snapshot that lets every record of `dataset` through.
    pub fn match_all(dataset: &MovieDataset) -> Self {
        FilterCriteria {
            min_year: dataset.year_range.0,
            max_year: dataset.year_range.1,
            ..Default::default()
        }
    }
}

/// Return indices of movies that pass all five predicates, preserving the
/// dataset's relative order.
///
/// * Year: `min_year <= release_year <= max_year`.
/// * Box office: compared through numeric coercion when a bound is present;
///   a non-coercible value fails any present bound check and passes when no
///   bound is set.
/// * Titles / directors / countries: exact case-sensitive membership, empty
///   set matches everything.
pub fn filtered_indices(dataset: &MovieDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .movies
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            if m.release_year < criteria.min_year || m.release_year > criteria.max_year {
                return false;
            }

            if criteria.min_box_office.is_some() || criteria.max_box_office.is_some() {
                let Some(gross) = m.box_office.as_f64() else {
                    return false;
                };
                if let Some(min) = criteria.min_box_office {
                    if gross < min {
                        return false;
                    }
                }
                if let Some(max) = criteria.max_box_office {
                    if gross > max {
                        return false;
                    }
                }
            }

            if !criteria.titles.is_empty() && !criteria.titles.contains(&m.title) {
                return false;
            }
            if !criteria.directors.is_empty() && !criteria.directors.contains(&m.director) {
                return false;
            }
            if !criteria.countries.is_empty() && !criteria.countries.contains(&m.country) {
                return false;
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// FilterControls – raw panel state, committed on Apply
// ---------------------------------------------------------------------------

/// Raw state of the filter panel widgets. Box-office bounds stay as text so
/// the user can clear them (empty or unparseable text = unbounded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterControls {
    pub min_year: i32,
    pub max_year: i32,
    pub min_box_office: String,
    pub max_box_office: String,
    pub titles: BTreeSet<String>,
    pub directors: BTreeSet<String>,
    pub countries: BTreeSet<String>,
}

impl FilterControls {
    /// Validate and snapshot the controls. Out-of-range input is clamped,
    /// never rejected: a negative box-office minimum becomes zero, and each
    /// min bound is clamped not to exceed its max bound.
    pub fn commit(&self) -> FilterCriteria {
        let min_year = self.min_year.min(self.max_year);

        let mut min_box_office = parse_bound(&self.min_box_office).map(|v| v.max(0.0));
        let max_box_office = parse_bound(&self.max_box_office);
        if let (Some(min), Some(max)) = (min_box_office, max_box_office) {
            min_box_office = Some(min.min(max));
        }

        FilterCriteria {
            min_year,
            max_year: self.max_year,
            min_box_office,
            max_box_office,
            titles: self.titles.clone(),
            directors: self.directors.clone(),
            countries: self.countries.clone(),
        }
    }

    /// Rebuild the controls from an applied snapshot; used to discard
    /// unsaved edits when the panel is closed without applying.
    pub fn revert(criteria: &FilterCriteria) -> Self {
        FilterControls {
            min_year: criteria.min_year,
            max_year: criteria.max_year,
            min_box_office: format_bound(criteria.min_box_office),
            max_box_office: format_bound(criteria.max_box_office),
            titles: criteria.titles.clone(),
            directors: criteria.directors.clone(),
            countries: criteria.countries.clone(),
        }
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

fn format_bound(bound: Option<f64>) -> String {
    match bound {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => v.to_string(),
    }
}
