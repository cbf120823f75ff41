//! Memoized dashboard.
//!
//! [`Dashboard`] pairs the shared read-only dataset with an
//! [`InteractionController`] and caches the six derived views under the
//! filter state they were computed for. Any transition that changes the
//! filter state causes the next read to recompute; a transition that leaves
//! it unchanged (e.g. selecting the type that is already selected) reuses
//! the cached views.

use std::sync::Arc;

use fire_map_analytics_models::{
    DashboardViews, FilterState, FirePropertyShare, HourlyDistribution, RankedBorough,
    ResponseTimeEntry, TypeFilter, TypeShare, YearRange, YearlyBreakdown,
};
use fire_map_geography_models::{BoroughAreas, BoroughDensity};
use fire_map_incident_models::{Dataset, SpecialServiceCount};

use crate::controller::{BoroughSelect, FilterEvent, InteractionController};
use crate::{density, reference, views};

#[derive(Debug)]
struct Cached {
    key: FilterState,
    views: DashboardViews,
}

/// Dataset, filter state and memoized views.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    areas: BoroughAreas,
    controller: InteractionController,
    cache: Cached,
    recomputations: u64,
}

impl Dashboard {
    /// Creates a dashboard in the reset state, with [`YearRange::FULL`] as the
    /// reset year range.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, areas: BoroughAreas) -> Self {
        Self::with_controller(dataset, areas, InteractionController::default())
    }

    /// Creates a dashboard starting from an existing controller state.
    #[must_use]
    pub fn with_controller(
        dataset: Arc<Dataset>,
        areas: BoroughAreas,
        controller: InteractionController,
    ) -> Self {
        let key = controller.state().clone();
        let views = views::compute(&dataset.incidents, &key);

        Self {
            dataset,
            areas,
            controller,
            cache: Cached { key, views },
            recomputations: 1,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub const fn areas(&self) -> &BoroughAreas {
        &self.areas
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        self.controller.state()
    }

    #[must_use]
    pub const fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Number of times the views have been computed, including the initial
    /// computation.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    fn refresh(&mut self) {
        let state = self.controller.state();
        if self.cache.key == *state {
            return;
        }

        log::debug!("Recomputing dashboard views for {state}");
        self.cache = Cached {
            key: state.clone(),
            views: views::compute(&self.dataset.incidents, state),
        };
        self.recomputations += 1;
    }

    /// The six derived views for the current filter state.
    pub fn views(&mut self) -> &DashboardViews {
        self.refresh();
        &self.cache.views
    }

    /// Applies a transition and returns the views for the new state.
    pub fn apply(&mut self, event: FilterEvent) -> &DashboardViews {
        self.controller.apply(event);
        self.views()
    }

    /// Choropleth values for every borough in the current borough totals.
    pub fn densities(&mut self) -> Vec<BoroughDensity> {
        self.refresh();
        density::densities(&self.cache.views.borough_totals, &self.areas)
    }

    /// Choropleth values for the named boroughs (typically every boundary
    /// feature), in the given order.
    pub fn densities_for<'a>(
        &mut self,
        boroughs: impl IntoIterator<Item = &'a str>,
    ) -> Vec<BoroughDensity> {
        self.refresh();
        density::densities_for(boroughs, &self.cache.views.borough_totals, &self.areas)
    }

    /// Type percentages for the hero section.
    pub fn type_shares(&mut self) -> Vec<TypeShare> {
        self.refresh();
        reference::type_shares(&self.cache.views.type_breakdown)
    }

    /// The top of the borough ranking, flagging the selected borough.
    pub fn top_boroughs(&mut self) -> Vec<RankedBorough> {
        self.refresh();
        reference::top_boroughs(
            &self.cache.views.borough_ranking,
            self.controller.state().selected_borough.as_deref(),
        )
    }

    #[must_use]
    pub fn yearly_breakdown(&self) -> YearlyBreakdown {
        reference::yearly_breakdown(&self.dataset.yearly, self.state().year_range)
    }

    #[must_use]
    pub fn hourly_distribution(&self) -> HourlyDistribution {
        reference::hourly_distribution(&self.dataset.hourly)
    }

    #[must_use]
    pub fn response_time_ranking(&self) -> Vec<ResponseTimeEntry> {
        reference::response_time_ranking(
            &self.dataset.response_times,
            self.state().selected_borough.as_deref(),
        )
    }

    #[must_use]
    pub fn special_services(&self) -> &[SpecialServiceCount] {
        &self.dataset.special_services
    }

    #[must_use]
    pub fn fire_property_shares(&self) -> Vec<FirePropertyShare> {
        reference::fire_property_shares(&self.dataset.fire_properties)
    }

    /// Borough dropdown options.
    #[must_use]
    pub fn boroughs(&self) -> Vec<String> {
        reference::boroughs(&self.dataset.incidents)
    }

    /// Type dropdown options, `All` first.
    #[must_use]
    pub fn incident_types(&self) -> Vec<TypeFilter> {
        reference::incident_types(&self.dataset.incidents)
    }
}

impl BoroughSelect for Dashboard {
    fn on_borough_select(&mut self, name: &str) {
        self.controller.on_borough_select(name);
    }
}
