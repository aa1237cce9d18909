//! Data layer for the meal aggregator.
//!
//! Reads participant food logs, groups entries into meals, writes the
//! aggregated CSV and runs the end-to-end conversion pipeline.

pub mod aggregator;
pub mod participants;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use meal_core as core;
