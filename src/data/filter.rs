use std::collections::{BTreeMap, BTreeSet};

use super::model::MovieDataset;

/// Pie label used when no movie survives the filters.
pub const NO_DATA_LABEL: &str = "No Data";

// ---------------------------------------------------------------------------
// Filter criteria: active user selections
// ---------------------------------------------------------------------------

/// The combination of active filters.
///
/// An empty set (or empty search string) means "no restriction": nothing
/// selected shows everything, the same as the source dropdowns with no
/// selection made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub years: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    /// Case-insensitive substring matched against the movie name.
    pub search: String,
}

impl FilterCriteria {
    /// True when no filter is active, i.e. every record passes.
    pub fn is_unrestricted(&self) -> bool {
        self.years.is_empty() && self.languages.is_empty() && self.search.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of movies that pass all active filters, in source order.
///
/// A movie passes when it satisfies the conjunction of every active
/// criterion:
/// * Year / language: its value is in the selected set (empty set → no
///   constraint).
/// * Search: its name contains the search text, case-insensitively. A
///   movie without a name never matches a non-empty search.
///
/// Unknown years or languages in the criteria simply match nothing; they
/// are not an error.
pub fn filtered_indices(dataset: &MovieDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.search.to_lowercase();

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if !criteria.years.is_empty() && !criteria.years.contains(&rec.year) {
                return false;
            }
            if !criteria.languages.is_empty() && !criteria.languages.contains(&rec.language) {
                return false;
            }
            if !needle.is_empty() {
                match &rec.name {
                    Some(name) => {
                        if !name.to_lowercase().contains(&needle) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregation – derived chart views
// ---------------------------------------------------------------------------

/// Count filtered movies per genre, ordered by descending count (ties
/// broken alphabetically).
///
/// An empty filtered set yields the single sentinel entry
/// `[("No Data", 1)]` so the pie chart always has something to draw.
pub fn genre_tally(dataset: &MovieDataset, indices: &[usize]) -> Vec<(String, usize)> {
    if indices.is_empty() {
        return vec![(NO_DATA_LABEL.to_string(), 1)];
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.records[i].genre.as_str()).or_default() += 1;
    }

    let mut tally: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(genre, n)| (genre.to_string(), n))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tally
}

/// (name, rating) pairs over the filtered movies, for the line chart.
pub fn rating_points(dataset: &MovieDataset, indices: &[usize]) -> Vec<(String, f64)> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.label().to_string(), rec.rating)
        })
        .collect()
}

/// (name, timing) pairs over the filtered movies, for the bar chart.
pub fn timing_points(dataset: &MovieDataset, indices: &[usize]) -> Vec<(String, f64)> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.label().to_string(), rec.timing_min)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn movie(year: &str, lang: &str, name: Option<&str>, genre: &str) -> Record {
        Record {
            year: year.to_string(),
            language: lang.to_string(),
            name: name.map(|s| s.to_string()),
            rating: 8.0,
            timing_min: 120.0,
            genre: genre.to_string(),
        }
    }

    fn sample_dataset() -> MovieDataset {
        MovieDataset::from_records(vec![
            movie("2020", "English", Some("Alpha"), "Drama"),
            movie("2021", "French", Some("Beta"), "Comedy"),
            movie("2021", "English", Some("Gamma"), "Drama"),
            movie("2022", "Hindi", None, "Action"),
        ])
    }

    fn years(vals: &[&str]) -> BTreeSet<String> {
        vals.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unrestricted_criteria_return_everything_in_order() {
        let ds = sample_dataset();
        let crit = FilterCriteria::default();
        assert!(crit.is_unrestricted());
        assert_eq!(filtered_indices(&ds, &crit), vec![0, 1, 2, 3]);
    }

    #[test]
    fn year_filter_selects_matching_records() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            years: years(&["2020"]),
            ..Default::default()
        };

        let idx = filtered_indices(&ds, &crit);
        assert_eq!(idx, vec![0]);
        assert_eq!(genre_tally(&ds, &idx), vec![("Drama".to_string(), 1)]);
    }

    #[test]
    fn criteria_are_a_conjunction() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            years: years(&["2021"]),
            languages: years(&["English"]),
            ..Default::default()
        };
        // Beta is 2021 but French; only Gamma passes both.
        assert_eq!(filtered_indices(&ds, &crit), vec![2]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            search: "bet".to_string(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &crit), vec![1]);
    }

    #[test]
    fn unnamed_movies_never_match_a_search_but_pass_without_one() {
        let ds = sample_dataset();

        let no_search = FilterCriteria::default();
        assert!(filtered_indices(&ds, &no_search).contains(&3));

        let with_search = FilterCriteria {
            search: "a".to_string(),
            ..Default::default()
        };
        assert!(!filtered_indices(&ds, &with_search).contains(&3));
    }

    #[test]
    fn unknown_values_match_nothing_and_yield_the_sentinel_tally() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            years: years(&["1917"]),
            ..Default::default()
        };

        let idx = filtered_indices(&ds, &crit);
        assert!(idx.is_empty());
        assert_eq!(genre_tally(&ds, &idx), vec![(NO_DATA_LABEL.to_string(), 1)]);
        assert!(rating_points(&ds, &idx).is_empty());
        assert!(timing_points(&ds, &idx).is_empty());
    }

    #[test]
    fn filtering_is_pure_and_idempotent() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            languages: years(&["English"]),
            search: "a".to_string(),
            ..Default::default()
        };

        let first = filtered_indices(&ds, &crit);
        let second = filtered_indices(&ds, &crit);
        assert_eq!(first, second);
        for &i in &first {
            assert_eq!(ds.records[i].language, "English");
        }
    }

    #[test]
    fn tally_orders_by_descending_count() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &FilterCriteria::default());
        let tally = genre_tally(&ds, &idx);
        assert_eq!(
            tally,
            vec![
                ("Drama".to_string(), 2),
                ("Action".to_string(), 1),
                ("Comedy".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_dataset_degrades_to_sentinel() {
        let ds = MovieDataset::default();
        let idx = filtered_indices(&ds, &FilterCriteria::default());
        assert!(idx.is_empty());
        assert_eq!(genre_tally(&ds, &idx), vec![(NO_DATA_LABEL.to_string(), 1)]);
    }

    #[test]
    fn chart_points_preserve_filtered_order() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &FilterCriteria::default());
        let names: Vec<String> = rating_points(&ds, &idx).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma", "(unnamed)"]);
    }
}
