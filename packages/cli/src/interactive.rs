//! Interactive filter session.
//!
//! Presents the dashboard's filter controls as `dialoguer` prompts. Every
//! selection is turned into a [`FilterEvent`], applied to the dashboard, and
//! followed by a summary of the recomputed views.

use dialoguer::{Input, Select};
use fire_map_analytics::controller::{BoroughSelect as _, FilterEvent};
use fire_map_analytics::dashboard::Dashboard;

/// Number of ranking rows printed after each transition.
const SUMMARY_ROWS: usize = 5;

/// Actions offered at each prompt.
enum Action {
    SetYearMin,
    SetYearMax,
    SelectType,
    SelectBorough,
    ClickBorough,
    Reset,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[
        Self::SetYearMin,
        Self::SetYearMax,
        Self::SelectType,
        Self::SelectBorough,
        Self::ClickBorough,
        Self::Reset,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::SetYearMin => "Set first year",
            Self::SetYearMax => "Set last year",
            Self::SelectType => "Choose incident type",
            Self::SelectBorough => "Choose borough",
            Self::ClickBorough => "Click a borough on the map",
            Self::Reset => "Reset filters",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the prompt loop until the user quits.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn run(mut dashboard: Dashboard) -> Result<(), Box<dyn std::error::Error>> {
    println!("London Fire Brigade incidents");
    print_summary(&mut dashboard);

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[idx] {
            Action::SetYearMin => {
                let min: u16 = Input::new()
                    .with_prompt("First year")
                    .default(dashboard.state().year_range.min)
                    .interact_text()?;
                dashboard.apply(FilterEvent::SetYearMin(min));
            }
            Action::SetYearMax => {
                let max: u16 = Input::new()
                    .with_prompt("Last year")
                    .default(dashboard.state().year_range.max)
                    .interact_text()?;
                dashboard.apply(FilterEvent::SetYearMax(max));
            }
            Action::SelectType => {
                let options = dashboard.incident_types();
                let current = options
                    .iter()
                    .position(|t| *t == dashboard.state().selected_type)
                    .unwrap_or(0);
                let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
                let idx = Select::new()
                    .with_prompt("Incident type")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                dashboard.apply(FilterEvent::SelectType(options[idx]));
            }
            Action::SelectBorough => {
                let boroughs = dashboard.boroughs();
                let mut labels = vec!["All London".to_string()];
                labels.extend(boroughs.iter().cloned());
                let idx = Select::new()
                    .with_prompt("Borough")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let borough = idx.checked_sub(1).map(|i| boroughs[i].clone());
                dashboard.apply(FilterEvent::SelectBorough(borough));
            }
            Action::ClickBorough => {
                let boroughs = dashboard.boroughs();
                let Some(borough) = choose_borough_to_click(&boroughs)? else {
                    continue;
                };
                dashboard.on_borough_select(borough);
            }
            Action::Reset => {
                dashboard.apply(FilterEvent::Reset);
            }
            Action::Quit => return Ok(()),
        }

        print_summary(&mut dashboard);
    }
}

/// Prompts for the borough to click, or returns `None` without prompting
/// when the dataset has no boroughs.
fn choose_borough_to_click(boroughs: &[String]) -> Result<Option<&String>, dialoguer::Error> {
    if boroughs.is_empty() {
        log::warn!("The dataset has no boroughs to click");
        return Ok(None);
    }

    let idx = Select::new()
        .with_prompt("Borough to click")
        .items(boroughs)
        .default(0)
        .interact()?;
    Ok(Some(&boroughs[idx]))
}

fn print_summary(dashboard: &mut Dashboard) {
    let state = dashboard.state().clone();
    if state.year_range.is_inverted() {
        log::warn!("First year is after last year; every view is empty");
    }

    println!();
    println!("Filter: {state}");

    let shares = dashboard.type_shares();
    let split: Vec<String> = shares
        .iter()
        .map(|s| format!("{} {:.1}%", s.incident_type, s.percent))
        .collect();
    println!("Type split: {}", split.join(", "));

    let views = dashboard.views();
    println!("Total incidents: {}", views.total_incidents);
    println!("Months with incidents: {}", views.monthly_trend.len());
    for (rank, entry) in views.borough_ranking.iter().take(SUMMARY_ROWS).enumerate() {
        let marker = if state.selected_borough.as_deref() == Some(entry.borough.as_str()) {
            "*"
        } else {
            " "
        };
        let position = rank + 1;
        let (borough, count) = (&entry.borough, entry.count);
        println!("{marker}{position:>2}. {borough:<24} {count:>8}");
    }
    println!();
}
