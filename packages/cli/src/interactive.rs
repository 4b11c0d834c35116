//! Interactive dashboard session.
//!
//! Prompts for a date (defaulting to today), prints the district map, then
//! offers the per-district trend view.

use dialoguer::{Confirm, Input, Select};
use temp_map_dashboard::{Dashboard, MapView};

use crate::render::{MapTable, TrendTable};

/// Runs one interactive session against `dashboard`.
///
/// An invalid date re-prompts, and an unknown district prints a message;
/// neither ends the session.
///
/// # Errors
///
/// Returns an error if a prompt fails or the readings cannot be loaded.
pub fn run(dashboard: &Dashboard) -> Result<(), Box<dyn std::error::Error>> {
    println!("Temperature Data Visualization");
    println!();

    let view = prompt_map(dashboard)?;
    print!("{}", MapTable(&view));
    println!();

    if !Confirm::new()
        .with_prompt("Show temperature trend analysis over time?")
        .default(false)
        .interact()?
    {
        return Ok(());
    }

    let districts = dashboard.districts()?;
    if districts.is_empty() {
        println!("No districts have temperature readings.");
        return Ok(());
    }

    let idx = Select::new()
        .with_prompt("Select District")
        .items(&districts)
        .default(0)
        .max_length(20)
        .interact()?;

    match dashboard.trend(&districts[idx]) {
        Ok(trend) => print!("{}", TrendTable(&trend)),
        Err(e) if e.is_unknown_region() => println!("{e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn prompt_map(dashboard: &Dashboard) -> Result<MapView, Box<dyn std::error::Error>> {
    let today = chrono::Local::now().date_naive();

    loop {
        let input: String = Input::new()
            .with_prompt("Select a date (YYYY-MM-DD)")
            .default(today.to_string())
            .interact_text()?;

        match dashboard.map_view_for(&input) {
            Ok(view) => return Ok(view),
            Err(e) if e.is_invalid_date() => println!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
}
