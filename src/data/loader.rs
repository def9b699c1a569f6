use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{BoxOffice, Movie, MovieDataset};

#[derive(Debug, Error)]
#[error("Unsupported file extension: .{0}")]
pub struct UnsupportedExtension(String);

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a movie dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": 1, "title": "...", ... }, ...]`
/// * `.csv`  – header row naming the six movie columns
pub fn load_file(path: &Path) -> Result<MovieDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of flat movie objects.
///
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "The Seventh Seal",
///     "release_year": 1957,
///     "director": "Ingmar Bergman",
///     "box_office": "250000",
///     "country": "Sweden"
///   },
///   ...
/// ]
/// ```
///
/// `box_office` may be a number or a numeric string. Any row missing a
/// required field fails the whole load; the caller keeps its previous state.
fn load_json(path: &Path) -> Result<MovieDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<MovieDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut movies = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let movie: Movie = serde_json::from_value(rec.clone())
            .with_context(|| format!("Row {i}: not a well-formed movie record"))?;
        movies.push(movie);
    }

    Ok(MovieDataset::from_movies(movies))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the six column names, one movie per row.
/// `box_office` stays text when it does not parse as a number.
fn load_csv(path: &Path) -> Result<MovieDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let id_idx = col("id")?;
    let title_idx = col("title")?;
    let year_idx = col("release_year")?;
    let director_idx = col("director")?;
    let gross_idx = col("box_office")?;
    let country_idx = col("country")?;

    let mut movies = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let id: i64 = field(id_idx)
            .parse()
            .with_context(|| format!("CSV row {row_no}: 'id' is not an integer"))?;
        let release_year: i32 = field(year_idx)
            .parse()
            .with_context(|| format!("CSV row {row_no}: 'release_year' is not an integer"))?;

        let gross_raw = field(gross_idx);
        let box_office = match gross_raw.trim().parse::<f64>() {
            Ok(v) => BoxOffice::Number(v),
            Err(_) => BoxOffice::Text(gross_raw),
        };

        movies.push(Movie {
            id,
            title: field(title_idx),
            release_year,
            director: field(director_idx),
            box_office,
            country: field(country_idx),
        });
    }

    Ok(MovieDataset::from_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_array() {
        let ds = parse_json(
            r#"[
                {"id":1,"title":"A","release_year":2000,"director":"X","box_office":100,"country":"US"},
                {"id":2,"title":"B","release_year":2010,"director":"Y","box_office":"50","country":"FR"}
            ]"#,
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.movies[0].box_office.as_f64(), Some(100.0));
        assert_eq!(ds.movies[1].box_office.as_f64(), Some(50.0));
        assert_eq!(ds.year_range, (2000, 2010));
    }

    #[test]
    fn missing_required_field_fails_the_load() {
        let err = parse_json(r#"[{"id":1,"title":"A","release_year":2000}]"#).unwrap_err();
        assert!(err.to_string().contains("Row 0"));
    }

    #[test]
    fn rejects_non_array_root() {
        assert!(parse_json(r#"{"movies":[]}"#).is_err());
    }

    #[test]
    fn empty_array_is_a_valid_empty_dataset() {
        let ds = parse_json("[]").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn unsupported_extension_is_a_typed_error() {
        let err = load_file(Path::new("movies.parquet")).unwrap_err();
        assert!(err.downcast_ref::<UnsupportedExtension>().is_some());
    }
}
