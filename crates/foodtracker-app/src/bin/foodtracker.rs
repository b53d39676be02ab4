//! FoodTracker desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop FoodTracker application.

use std::error::Error;

use clap::Parser as _;
use foodtracker_app::{AppConfig, Cli, FoodTrackerApp};

fn main() -> Result<(), Box<dyn Error>> {
    const APP_ID: &str = "io.github.foodtracker-rs.foodtracker";

    better_panic::install();
    env_logger::init();

    let config = AppConfig::from_cli(Cli::parse())?;
    log::info!(
        "starting FoodTracker {}, data_file={}",
        foodtracker_app::version::build_version(),
        config.data_file.display()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((480.0, 720.0))
            .with_min_inner_size((360.0, 480.0))
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "FoodTracker",
        options,
        Box::new(move |cc| Ok(Box::new(FoodTrackerApp::new(cc, &config)))),
    )?;
    Ok(())
}
