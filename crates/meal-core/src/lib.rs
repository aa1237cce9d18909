//! Core types for the meal aggregator.
//!
//! Holds the food-log data model, the error taxonomy, timestamp parsing,
//! display formatting and the command-line settings shared by the data and
//! binary crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod timestamps;
