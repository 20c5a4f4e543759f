use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{MovieDataset, Record};

/// The six columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Year",
    "Language",
    "Movie Name",
    "Rating(10)",
    "Timing(min)",
    "Genre",
];

/// Problems with the fixed movie-table schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("expected a top-level JSON array of records")]
    NotAnArray,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a movie dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row `Year,Language,Movie Name,Rating(10),Timing(min),Genre`
/// * `.json` – records-oriented array of objects with the same keys
///
/// Malformed rows are skipped with a warning rather than failing the whole
/// load; only structural problems (unreadable file, missing columns) are
/// errors.
pub fn load_file(path: &Path) -> Result<MovieDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Movie Name")]
    name: Option<String>,
    #[serde(rename = "Rating(10)")]
    rating: Option<f64>,
    #[serde(rename = "Timing(min)")]
    timing_min: Option<f64>,
    #[serde(rename = "Genre")]
    genre: String,
}

impl CsvRow {
    fn into_record(self) -> Record {
        Record {
            year: self.year,
            language: self.language,
            name: normalize_name(self.name),
            rating: self.rating.unwrap_or(0.0),
            timing_min: self.timing_min.unwrap_or(0.0),
            genre: self.genre,
        }
    }
}

/// Blank or whitespace-only names count as missing.
fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn load_csv(path: &Path) -> Result<MovieDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(SchemaError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        match result {
            Ok(row) => records.push(row.into_record()),
            Err(e) => log::warn!("CSV row {row_no}: skipping malformed row: {e}"),
        }
    }

    Ok(MovieDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Year": "2020",
///     "Language": "English",
///     "Movie Name": "Alpha",
///     "Rating(10)": 8.1,
///     "Timing(min)": 124,
///     "Genre": "Drama"
///   },
///   ...
/// ]
/// ```
///
/// `Year` may be a number or a string; it is carried as text either way.
fn load_json(path: &Path) -> Result<MovieDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = match root.as_array() {
        Some(rows) => rows,
        None => return Err(SchemaError::NotAnArray.into()),
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let Some(obj) = row.as_object() else {
            log::warn!("JSON row {i}: not an object, skipping");
            continue;
        };

        let (Some(year), Some(language), Some(genre)) = (
            text_field(obj, "Year"),
            text_field(obj, "Language"),
            text_field(obj, "Genre"),
        ) else {
            log::warn!("JSON row {i}: missing Year/Language/Genre, skipping");
            continue;
        };

        // Skip rows with malformed numbers, as the CSV loader does; a
        // missing or null value still defaults to 0.0.
        let rating = match num_field(obj, "Rating(10)") {
            NumCell::Value(v) => v,
            NumCell::Missing => 0.0,
            NumCell::Malformed => {
                log::warn!("JSON row {i}: non-numeric Rating(10), skipping");
                continue;
            }
        };
        let timing_min = match num_field(obj, "Timing(min)") {
            NumCell::Value(v) => v,
            NumCell::Missing => 0.0,
            NumCell::Malformed => {
                log::warn!("JSON row {i}: non-numeric Timing(min), skipping");
                continue;
            }
        };

        records.push(Record {
            year,
            language,
            name: normalize_name(text_field(obj, "Movie Name")),
            rating,
            timing_min,
            genre,
        });
    }

    Ok(MovieDataset::from_records(records))
}

/// Read a field as text, stringifying numbers the way `astype(str)` would.
fn text_field(obj: &serde_json::Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A numeric cell as found in a JSON row.
enum NumCell {
    Value(f64),
    /// Key absent or null.
    Missing,
    /// Present but not a number (and not a numeric string).
    Malformed,
}

/// Read a numeric field, accepting numbers or numeric strings.
fn num_field(obj: &serde_json::Map<String, JsonValue>, key: &str) -> NumCell {
    match obj.get(key) {
        None | Some(JsonValue::Null) => NumCell::Missing,
        Some(JsonValue::Number(n)) => match n.as_f64() {
            Some(v) => NumCell::Value(v),
            None => NumCell::Malformed,
        },
        Some(JsonValue::String(s)) => match s.trim().parse() {
            Ok(v) => NumCell::Value(v),
            Err(_) => NumCell::Malformed,
        },
        Some(_) => NumCell::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "movies.csv",
            "Year,Language,Movie Name,Rating(10),Timing(min),Genre\n\
             2020,English,Alpha,8.1,124,Drama\n\
             2021,French,Beta,6.4,90,Comedy\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].name.as_deref(), Some("Alpha"));
        assert_eq!(ds.records[0].year, "2020");
        assert_eq!(ds.records[1].rating, 6.4);
        assert_eq!(ds.records[1].timing_min, 90.0);
    }

    #[test]
    fn malformed_csv_rows_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "movies.csv",
            "Year,Language,Movie Name,Rating(10),Timing(min),Genre\n\
             2020,English,Alpha,8.1,124,Drama\n\
             2021,French,Beta,not-a-number,90,Comedy\n\
             2022,Hindi,Gamma,7.0,101,Action\n",
        );

        let ds = load_file(&path).unwrap();
        let names: Vec<_> = ds.records.iter().map(|r| r.label()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn blank_movie_name_becomes_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "movies.csv",
            "Year,Language,Movie Name,Rating(10),Timing(min),Genre\n\
             2020,English,  ,8.1,124,Drama\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records[0].name, None);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "movies.csv",
            "Year,Language,Movie Name,Rating(10),Genre\n\
             2020,English,Alpha,8.1,Drama\n",
        );

        let err = load_file(&path).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().unwrap();
        assert!(matches!(schema, SchemaError::MissingColumn("Timing(min)")));
    }

    #[test]
    fn loads_json_with_numeric_years() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "movies.json",
            r#"[
                {"Year": 2020, "Language": "English", "Movie Name": "Alpha",
                 "Rating(10)": 8.1, "Timing(min)": 124, "Genre": "Drama"},
                {"Year": "2021", "Language": "French", "Movie Name": "Beta",
                 "Rating(10)": "6.4", "Timing(min)": 90, "Genre": "Comedy"}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].year, "2020");
        assert_eq!(ds.records[1].rating, 6.4);
    }

    #[test]
    fn malformed_json_rows_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "movies.json",
            r#"[
                {"Year": "2020", "Language": "English", "Movie Name": "Alpha",
                 "Rating(10)": 8.1, "Timing(min)": 124, "Genre": "Drama"},
                {"Year": "2021", "Language": "French", "Movie Name": "Beta",
                 "Rating(10)": "not-a-number", "Timing(min)": 90, "Genre": "Comedy"},
                {"Year": "2022", "Language": "Hindi", "Movie Name": "Gamma",
                 "Rating(10)": 7.0, "Timing(min)": 101, "Genre": "Action"},
                {"Year": "2023", "Language": "Korean", "Movie Name": "Delta",
                 "Rating(10)": 6.2, "Genre": "Thriller"}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        let names: Vec<_> = ds.records.iter().map(|r| r.label()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma", "Delta"]);
        // Missing (as opposed to malformed) numbers default to 0.0.
        assert_eq!(ds.records[2].timing_min, 0.0);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "movies.parquet", "");
        assert!(load_file(&path).is_err());
    }
}
