use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{FilterCriteria, filtered_indices, genre_tally};
use crate::data::model::MovieDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which categorical column a filter widget operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Year,
    Language,
}

impl FilterField {
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Year => "Year",
            FilterField::Language => "Language",
        }
    }
}

/// Which of the three charts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartVisibility {
    pub line: bool,
    pub bar: bool,
    pub pie: bool,
}

impl Default for ChartVisibility {
    fn default() -> Self {
        ChartVisibility {
            line: true,
            bar: true,
            pie: true,
        }
    }
}

impl ChartVisibility {
    /// True when at least one chart is shown.
    pub fn any(self) -> bool {
        self.line || self.bar || self.pie
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<MovieDataset>,

    /// Active filter selections.
    pub criteria: FilterCriteria,

    /// Indices of movies passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Genre → count over the visible movies (cached).
    pub genre_tally: Vec<(String, usize)>,

    /// Stable genre colours for the pie chart.
    pub genre_colors: ColorMap,

    /// Per-chart show/hide toggles; survive dataset reloads.
    pub charts: ChartVisibility,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            genre_tally: Vec::new(),
            genre_colors: ColorMap::default(),
            charts: ChartVisibility::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset filters to "show all".
    pub fn set_dataset(&mut self, dataset: MovieDataset) {
        self.criteria = FilterCriteria::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.genre_tally = genre_tally(&dataset, &self.visible_indices);
        self.genre_colors = ColorMap::new(&dataset.genres);

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the cached views after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
            self.genre_tally = genre_tally(ds, &self.visible_indices);
        }
    }

    /// The selectable values for a filter field, from the loaded dataset.
    pub fn options(&self, field: FilterField) -> BTreeSet<String> {
        match &self.dataset {
            Some(ds) => match field {
                FilterField::Year => ds.years.clone(),
                FilterField::Language => ds.languages.clone(),
            },
            None => BTreeSet::new(),
        }
    }

    fn selection_mut(&mut self, field: FilterField) -> &mut BTreeSet<String> {
        match field {
            FilterField::Year => &mut self.criteria.years,
            FilterField::Language => &mut self.criteria.languages,
        }
    }

    /// The currently selected values for a filter field.
    pub fn selection(&self, field: FilterField) -> &BTreeSet<String> {
        match field {
            FilterField::Year => &self.criteria.years,
            FilterField::Language => &self.criteria.languages,
        }
    }

    /// Toggle a single value in a field's selection.
    pub fn toggle_value(&mut self, field: FilterField, value: &str) {
        let selected = self.selection_mut(field);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every value of a field (same visible result as no filter).
    pub fn select_all(&mut self, field: FilterField) {
        let all = self.options(field);
        *self.selection_mut(field) = all;
        self.refilter();
    }

    /// Clear a field's selection; an empty selection means no restriction.
    pub fn clear_selection(&mut self, field: FilterField) {
        self.selection_mut(field).clear();
        self.refilter();
    }

    /// Replace the movie-name search text.
    pub fn set_search(&mut self, text: String) {
        self.criteria.search = text;
        self.refilter();
    }
}
