//! Interaction controller.
//!
//! Owns the [`FilterState`] and applies the transitions user input can
//! trigger. Transitions never validate across fields: setting the lower
//! year above the upper one is allowed and simply empties every view.

use fire_map_analytics_models::{FilterState, TypeFilter, YearRange};

/// Callback through which the map and ranking sinks report a borough click.
pub trait BoroughSelect {
    /// Handles a click on the borough called `name`.
    fn on_borough_select(&mut self, name: &str);
}

/// A single user-triggered filter transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Lower year bound edited.
    SetYearMin(u16),
    /// Upper year bound edited.
    SetYearMax(u16),
    /// Incident type dropdown changed.
    SelectType(TypeFilter),
    /// Borough dropdown changed; `None` selects all of London.
    SelectBorough(Option<String>),
    /// Borough clicked on the map or the ranking chart.
    ToggleBorough(String),
    /// "Reset filters" pressed.
    Reset,
}

/// Owns the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionController {
    state: FilterState,
    full_range: YearRange,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(YearRange::FULL)
    }
}

impl InteractionController {
    /// Creates a controller in the reset state for a dataset spanning
    /// `full_range`.
    #[must_use]
    pub fn new(full_range: YearRange) -> Self {
        Self {
            state: reset_state(full_range),
            full_range,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Year bounds restored by [`Self::reset`].
    #[must_use]
    pub const fn full_range(&self) -> YearRange {
        self.full_range
    }

    pub const fn set_year_min(&mut self, min: u16) {
        self.state.year_range.min = min;
    }

    pub const fn set_year_max(&mut self, max: u16) {
        self.state.year_range.max = max;
    }

    pub const fn select_type(&mut self, selected_type: TypeFilter) {
        self.state.selected_type = selected_type;
    }

    /// Direct selection from the borough dropdown. An empty name selects
    /// all of London.
    pub fn select_borough(&mut self, borough: Option<String>) {
        self.state.selected_borough = borough.filter(|name| !name.is_empty());
    }

    /// Click selection: clicking the selected borough again clears the
    /// selection, clicking any other borough replaces it.
    pub fn toggle_borough(&mut self, name: &str) {
        if self.state.selected_borough.as_deref() == Some(name) {
            self.state.selected_borough = None;
        } else {
            self.state.selected_borough = Some(name.to_string());
        }
    }

    /// Restores the full year range, `All` types and all boroughs at once.
    pub fn reset(&mut self) {
        self.state = reset_state(self.full_range);
    }

    /// Whether any filter differs from the reset state.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        crate::reference::has_filters(&self.state, self.full_range)
    }

    /// Applies one transition.
    pub fn apply(&mut self, event: FilterEvent) {
        log::debug!("Applying filter event {event:?}");
        match event {
            FilterEvent::SetYearMin(min) => self.set_year_min(min),
            FilterEvent::SetYearMax(max) => self.set_year_max(max),
            FilterEvent::SelectType(selected_type) => self.select_type(selected_type),
            FilterEvent::SelectBorough(borough) => self.select_borough(borough),
            FilterEvent::ToggleBorough(name) => self.toggle_borough(&name),
            FilterEvent::Reset => self.reset(),
        }
    }
}

impl BoroughSelect for InteractionController {
    fn on_borough_select(&mut self, name: &str) {
        self.toggle_borough(name);
    }
}

fn reset_state(full_range: YearRange) -> FilterState {
    FilterState {
        year_range: full_range,
        selected_type: TypeFilter::All,
        selected_borough: None,
    }
}
