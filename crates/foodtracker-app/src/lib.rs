//! Shared library module for the FoodTracker app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{
    app::FoodTrackerApp,
    config::{AppConfig, Cli, ConfigError},
};

pub mod app;
pub mod config;
pub mod rating_control;
pub mod version;

mod action;
mod navigation;
mod state;
mod ui;
mod view_model_builder;
