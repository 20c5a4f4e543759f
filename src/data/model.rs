use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the movie table
// ---------------------------------------------------------------------------

/// A single movie (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Release year, kept as text so lexical forms like "2020/21" survive.
    pub year: String,
    pub language: String,
    /// Movie name; `None` when the source cell is missing or blank.
    pub name: Option<String>,
    /// Rating on a 0–10 scale.
    pub rating: f64,
    /// Runtime in minutes.
    pub timing_min: f64,
    pub genre: String,
}

impl Record {
    /// Axis / legend label for this movie.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

// ---------------------------------------------------------------------------
// MovieDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter options.
///
/// Loaded once at startup (or via File → Open) and read-only afterwards;
/// filtering produces index lists and never touches the records.
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    /// All movies, in source order.
    pub records: Vec<Record>,
    /// Sorted unique years, options for the year filter.
    pub years: BTreeSet<String>,
    /// Sorted unique languages, options for the language filter.
    pub languages: BTreeSet<String>,
    /// Sorted unique genres, used for stable pie colours.
    pub genres: BTreeSet<String>,
}

impl MovieDataset {
    /// Build the option indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut languages = BTreeSet::new();
        let mut genres = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year.clone());
            languages.insert(rec.language.clone());
            genres.insert(rec.genre.clone());
        }
        MovieDataset {
            records,
            years,
            languages,
            genres,
        }
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: &str, lang: &str, name: &str, genre: &str) -> Record {
        Record {
            year: year.to_string(),
            language: lang.to_string(),
            name: Some(name.to_string()),
            rating: 7.0,
            timing_min: 100.0,
            genre: genre.to_string(),
        }
    }

    #[test]
    fn from_records_builds_sorted_unique_options() {
        let ds = MovieDataset::from_records(vec![
            rec("2021", "French", "Beta", "Comedy"),
            rec("2020", "English", "Alpha", "Drama"),
            rec("2020", "English", "Gamma", "Drama"),
        ]);

        assert_eq!(ds.len(), 3);
        let years: Vec<&str> = ds.years.iter().map(|s| s.as_str()).collect();
        assert_eq!(years, ["2020", "2021"]);
        let langs: Vec<&str> = ds.languages.iter().map(|s| s.as_str()).collect();
        assert_eq!(langs, ["English", "French"]);
        let genres: Vec<&str> = ds.genres.iter().map(|s| s.as_str()).collect();
        assert_eq!(genres, ["Comedy", "Drama"]);
    }

    #[test]
    fn label_falls_back_for_unnamed_movies() {
        let mut r = rec("2020", "English", "Alpha", "Drama");
        r.name = None;
        assert_eq!(r.label(), "(unnamed)");
    }
}
