use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BoxOffice – gross revenue, stored as number or text in the source data
// ---------------------------------------------------------------------------

/// Box-office gross as it appears in the source file. Real-world exports mix
/// plain numbers with string-typed numbers (and the occasional "N/A"), so the
/// value is kept as loaded and coerced on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxOffice {
    Number(f64),
    Text(String),
}

impl Default for BoxOffice {
    fn default() -> Self {
        BoxOffice::Text(String::new())
    }
}

impl fmt::Display for BoxOffice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxOffice::Number(v) => write!(f, "{v}"),
            BoxOffice::Text(s) => write!(f, "{s}"),
        }
    }
}

impl BoxOffice {
    /// Best-effort numeric coercion. `None` means "not a number": the value
    /// fails any bound comparison and sorts after all numeric values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BoxOffice::Number(v) => Some(*v),
            BoxOffice::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

// ---------------------------------------------------------------------------
// Movie – one row of the table
// ---------------------------------------------------------------------------

/// A single movie record. Records are immutable once loaded; a record
/// missing a required field fails deserialization of the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub director: String,
    /// Absent in some exports; defaults to empty text, which coerces to
    /// "not a number".
    #[serde(default)]
    pub box_office: BoxOffice,
    pub country: String,
}

// ---------------------------------------------------------------------------
// SortKey – the sortable table columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    ReleaseYear,
    Director,
    BoxOffice,
    Country,
}

impl SortKey {
    /// All columns in display order.
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::Title,
        SortKey::ReleaseYear,
        SortKey::Director,
        SortKey::BoxOffice,
        SortKey::Country,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Title => "Title",
            SortKey::ReleaseYear => "Release year",
            SortKey::Director => "Director",
            SortKey::BoxOffice => "Box office",
            SortKey::Country => "Country",
        }
    }
}

/// Compare two movies on a single column.
///
/// String columns use case-insensitive Unicode comparison with byte order as
/// the final tie-break (an approximation of locale collation). Box office is
/// compared through [`BoxOffice::as_f64`]; non-coercible values order after
/// all numeric ones.
pub fn compare_by(a: &Movie, b: &Movie, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Title => compare_str(&a.title, &b.title),
        SortKey::ReleaseYear => a.release_year.cmp(&b.release_year),
        SortKey::Director => compare_str(&a.director, &b.director),
        SortKey::BoxOffice => compare_box_office(&a.box_office, &b.box_office),
        SortKey::Country => compare_str(&a.country, &b.country),
    }
}

fn compare_str(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn compare_box_office(a: &BoxOffice, b: &BoxOffice) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// MovieDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter-widget indices.
/// The movie list is the source of truth: load order preserved, never
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    /// All movies (rows), in file order.
    pub movies: Vec<Movie>,
    /// Min/max release year across the dataset; `(0, 0)` when empty.
    pub year_range: (i32, i32),
    /// Sorted unique values for the multi-select filters.
    pub titles: BTreeSet<String>,
    pub directors: BTreeSet<String>,
    pub countries: BTreeSet<String>,
}

impl MovieDataset {
    /// Build the widget indices from the loaded movies.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut titles = BTreeSet::new();
        let mut directors = BTreeSet::new();
        let mut countries = BTreeSet::new();
        let mut year_range: Option<(i32, i32)> = None;

        for m in &movies {
            titles.insert(m.title.clone());
            directors.insert(m.director.clone());
            countries.insert(m.country.clone());
            year_range = Some(match year_range {
                None => (m.release_year, m.release_year),
                Some((lo, hi)) => (lo.min(m.release_year), hi.max(m.release_year)),
            });
        }

        MovieDataset {
            movies,
            year_range: year_range.unwrap_or((0, 0)),
            titles,
            directors,
            countries,
        }
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn box_office_coercion() {
        assert_eq!(BoxOffice::Number(100.0).as_f64(), Some(100.0));
        assert_eq!(BoxOffice::Text("250.5".into()).as_f64(), Some(250.5));
        assert_eq!(BoxOffice::Text(" 42 ".into()).as_f64(), Some(42.0));
        assert_eq!(BoxOffice::Text("N/A".into()).as_f64(), None);
        assert_eq!(BoxOffice::Text(String::new()).as_f64(), None);
        assert_eq!(BoxOffice::default().as_f64(), None);
    }

    #[test]
    fn dataset_indices_and_year_range() {
        let ds = MovieDataset::from_movies(vec![
            movie(1, "A", 2000, "X", BoxOffice::Number(100.0), "US"),
            movie(2, "B", 2010, "Y", BoxOffice::Number(50.0), "FR"),
            movie(3, "A", 1995, "Y", BoxOffice::Text("10".into()), "US"),
        ]);
        assert_eq!(ds.year_range, (1995, 2010));
        assert_eq!(ds.titles.len(), 2);
        assert_eq!(ds.directors.len(), 2);
        assert_eq!(ds.countries.len(), 2);
    }

    #[test]
    fn empty_dataset_defaults() {
        let ds = MovieDataset::from_movies(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.year_range, (0, 0));
    }

    #[test]
    fn string_comparison_ignores_case() {
        let a = movie(1, "alien", 1979, "X", BoxOffice::Number(1.0), "US");
        let b = movie(2, "Blade", 1998, "Y", BoxOffice::Number(2.0), "US");
        assert_eq!(compare_by(&a, &b, SortKey::Title), Ordering::Less);
    }

    #[test]
    fn non_numeric_box_office_sorts_last() {
        let a = movie(1, "A", 2000, "X", BoxOffice::Text("N/A".into()), "US");
        let b = movie(2, "B", 2000, "Y", BoxOffice::Number(1.0), "US");
        assert_eq!(compare_by(&a, &b, SortKey::BoxOffice), Ordering::Greater);
        assert_eq!(compare_by(&b, &a, SortKey::BoxOffice), Ordering::Less);
    }

    #[test]
    fn movie_deserializes_string_box_office() {
        let m: Movie = serde_json::from_str(
            r#"{"id":7,"title":"T","release_year":1999,"director":"D","box_office":"123.5","country":"JP"}"#,
        )
        .unwrap();
        assert_eq!(m.box_office, BoxOffice::Text("123.5".into()));
        assert_eq!(m.box_office.as_f64(), Some(123.5));
    }

    #[test]
    fn missing_box_office_defaults_to_not_a_number() {
        let m: Movie = serde_json::from_str(
            r#"{"id":7,"title":"T","release_year":1999,"director":"D","country":"JP"}"#,
        )
        .unwrap();
        assert_eq!(m.box_office.as_f64(), None);
    }
}
