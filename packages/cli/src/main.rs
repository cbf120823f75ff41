#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line sink for the incident dashboard.
//!
//! Loads the static dataset once, applies the requested filter through the
//! interaction controller and prints the derived views as JSON. The
//! `interactive` subcommand drives the controller from terminal prompts,
//! printing a summary after every transition.

mod interactive;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use fire_map_analytics::controller::FilterEvent;
use fire_map_analytics::dashboard::Dashboard;
use fire_map_analytics_models::{FIRST_YEAR, LAST_YEAR, TypeFilter};
use fire_map_geography::{areas, boundaries, choropleth};
use fire_map_geography_models::BoroughAreas;
use fire_map_incident_models::Dataset;

#[derive(Parser)]
#[command(name = "fire_map", about = "London Fire Brigade incident dashboard")]
struct Cli {
    /// Dataset JSON file (defaults to the embedded sample dataset)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Borough area TOML file (defaults to the embedded London lookup)
    #[arg(long, global = true)]
    areas: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the six filter-driven views
    Views(FilterArgs),
    /// Print every chart's data, reference charts included
    Story(FilterArgs),
    /// Print choropleth densities, or enriched boundaries when given a `GeoJSON` file
    Choropleth {
        #[command(flatten)]
        filter: FilterArgs,

        /// Borough boundary `GeoJSON` `FeatureCollection`
        #[arg(long)]
        boundaries: Option<PathBuf>,
    },
    /// Print the borough and incident type filter options
    Options,
    /// Drive the filters from terminal prompts
    Interactive,
}

/// Initial filter state.
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// First year to include
    #[arg(long, default_value_t = FIRST_YEAR)]
    year_min: u16,

    /// Last year to include
    #[arg(long, default_value_t = LAST_YEAR)]
    year_max: u16,

    /// Incident type: "All", "Fire", "False Alarm" or "Special Service"
    #[arg(long = "type", default_value = "All")]
    incident_type: TypeFilter,

    /// Borough to focus on (all of London when omitted)
    #[arg(long)]
    borough: Option<String>,
}

impl FilterArgs {
    /// Transitions that take the reset state to this filter.
    fn events(&self) -> Vec<FilterEvent> {
        vec![
            FilterEvent::SetYearMin(self.year_min),
            FilterEvent::SetYearMax(self.year_max),
            FilterEvent::SelectType(self.incident_type),
            FilterEvent::SelectBorough(self.borough.clone()),
        ]
    }
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => fire_map_dataset::load_dataset(path)?,
        None => {
            log::info!("No dataset given, using the embedded sample");
            fire_map_dataset::sample_dataset()
        }
    })
}

fn load_areas(path: Option<&Path>) -> Result<BoroughAreas, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => areas::load_areas(path)?,
        None => areas::default_areas(),
    })
}

fn filtered_dashboard(
    dataset: Arc<Dataset>,
    areas: BoroughAreas,
    filter: &FilterArgs,
) -> Dashboard {
    let mut dashboard = Dashboard::new(dataset, areas);
    for event in filter.events() {
        dashboard.apply(event);
    }
    dashboard
}

/// Every chart's data for the dashboard's current state.
fn story(dashboard: &mut Dashboard) -> serde_json::Value {
    let views = dashboard.views().clone();
    serde_json::json!({
        "filter": dashboard.state(),
        "hasFilters": dashboard.controller().has_filters(),
        "typeShares": dashboard.type_shares(),
        "boroughTotals": views.borough_totals,
        "choropleth": dashboard.densities(),
        "topBoroughs": dashboard.top_boroughs(),
        "typeBreakdown": views.type_breakdown,
        "yearlyBreakdown": dashboard.yearly_breakdown(),
        "specialServices": dashboard.special_services(),
        "fireProperties": dashboard.fire_property_shares(),
        "monthlyTrend": views.monthly_trend,
        "hourlyDistribution": dashboard.hourly_distribution(),
        "responseTimes": dashboard.response_time_ranking(),
        "totalIncidents": views.total_incidents,
    })
}

fn choropleth_json(
    dashboard: &mut Dashboard,
    boundaries_path: Option<&Path>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let Some(path) = boundaries_path else {
        return Ok(serde_json::to_value(dashboard.densities())?);
    };

    let collection = boundaries::load_boundaries(path)?;
    let names = boundaries::borough_names(&collection);
    let densities = dashboard.densities_for(names.iter().map(String::as_str));
    let enriched = choropleth::enrich(
        &collection,
        &densities,
        dashboard.state().selected_borough.as_deref(),
    );
    Ok(serde_json::to_value(&enriched)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let dataset = Arc::new(load_dataset(cli.data.as_deref())?);
    let areas = load_areas(cli.areas.as_deref())?;

    let output = match cli.command {
        Commands::Views(filter) => {
            let mut dashboard = filtered_dashboard(dataset, areas, &filter);
            serde_json::to_value(dashboard.views())?
        }
        Commands::Story(filter) => story(&mut filtered_dashboard(dataset, areas, &filter)),
        Commands::Choropleth { filter, boundaries } => {
            let mut dashboard = filtered_dashboard(dataset, areas, &filter);
            choropleth_json(&mut dashboard, boundaries.as_deref())?
        }
        Commands::Options => {
            let dashboard = Dashboard::new(dataset, areas);
            serde_json::json!({
                "boroughs": dashboard.boroughs(),
                "incidentTypes": dashboard.incident_types(),
            })
        }
        Commands::Interactive => {
            interactive::run(Dashboard::new(dataset, areas))?;
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
