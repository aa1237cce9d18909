//! End-to-end conversion of a participant's food log into meals.
//!
//! Read → aggregate → write, all or nothing. Nothing is written unless every
//! row of the input parsed.

use std::path::Path;
use std::time::Instant;

use meal_core::error::{MealError, Result};
use meal_core::models::{MealAggregate, ParticipantId};
use tracing::{info, warn};

use crate::aggregator::{MealAggregator, MealTotals};
use crate::participants::{discover_participants, ParticipantPaths};
use crate::reader::{read_food_log, ReaderOptions};
use crate::writer::write_meals;

// ── Public types ──────────────────────────────────────────────────────────────

/// Options shared by every conversion in a run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub reader: ReaderOptions,
    pub output_name: String,
    /// Aggregate without writing the output file.
    pub dry_run: bool,
}

/// Outcome of one participant conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub paths: ParticipantPaths,
    /// The aggregated meals, in timestamp order.
    pub meals: Vec<MealAggregate>,
    /// Totals over the output meals.
    pub totals: MealTotals,
    /// Number of food-log entries read.
    pub entries_read: usize,
    /// Whether the output file was written.
    pub written: bool,
    /// Wall-clock seconds spent reading the input.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent grouping and writing.
    pub transform_time_seconds: f64,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Convert the food log at `paths.input` into `paths.output`.
///
/// 1. Read and normalize every entry (fails on the first bad row).
/// 2. Group entries into meals.
/// 3. Write the meals, unless `dry_run`.
pub fn convert_participant(
    paths: &ParticipantPaths,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    // ── Step 1: Load entries ──────────────────────────────────────────────────
    let load_start = Instant::now();
    let entries = read_food_log(&paths.input, &options.reader)?;
    let load_time = load_start.elapsed().as_secs_f64();

    // ── Step 2: Aggregate ─────────────────────────────────────────────────────
    let transform_start = Instant::now();
    let meals = MealAggregator::aggregate(&entries);
    let totals = MealAggregator::calculate_totals(&meals);

    // ── Step 3: Write ─────────────────────────────────────────────────────────
    let written = if options.dry_run {
        info!("Dry run: not writing {}", paths.output.display());
        false
    } else {
        write_meals(&paths.output, &meals)?;
        true
    };
    let transform_time = transform_start.elapsed().as_secs_f64();

    info!(
        "Participant {}: {} entries → {} meals ({:.1} kcal)",
        paths.id,
        entries.len(),
        meals.len(),
        totals.nutrients.calorie
    );

    Ok(ConversionReport {
        paths: paths.clone(),
        entries_read: entries.len(),
        meals,
        totals,
        written,
        load_time_seconds: load_time,
        transform_time_seconds: transform_time,
    })
}

/// Convert one participant identified by `id` under `data_root`.
pub fn convert_one(
    data_root: &Path,
    id: ParticipantId,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let paths = ParticipantPaths::new(data_root, id, &options.output_name);
    convert_participant(&paths, options)
}

/// Convert every participant folder under `data_root`, in id order.
///
/// Folders without an input file are skipped with a warning. Any other
/// failure stops the batch.
pub fn convert_all(data_root: &Path, options: &ConvertOptions) -> Result<Vec<ConversionReport>> {
    let ids = discover_participants(data_root);
    if ids.is_empty() {
        return Err(MealError::Config(format!(
            "no data_p<N> folders found in {}",
            data_root.display()
        )));
    }

    let mut reports = Vec::with_capacity(ids.len());
    for id in ids {
        match convert_one(data_root, id, options) {
            Ok(report) => reports.push(report),
            Err(MealError::MissingInput(path)) => {
                warn!("Skipping participant {}: {} not found", id, path.display());
            }
            Err(e) => return Err(e),
        }
    }
    Ok(reports)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
