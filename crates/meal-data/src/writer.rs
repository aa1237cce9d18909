//! Aggregated meal CSV output.

use std::io::Write;
use std::path::{Path, PathBuf};

use meal_core::error::{MealError, Result};
use meal_core::models::MealAggregate;
use meal_core::timestamps::TimestampProcessor;
use serde::Serialize;
use tracing::debug;

/// One output row. Field order defines the header.
#[derive(Debug, Serialize)]
struct MealRecord<'a> {
    datetime: String,
    logged_food: &'a str,
    calorie: f64,
    total_carb: f64,
    dietary_fiber: f64,
    sugar: f64,
    protein: f64,
    total_fat: f64,
}

impl<'a> From<&'a MealAggregate> for MealRecord<'a> {
    fn from(meal: &'a MealAggregate) -> Self {
        let n = &meal.nutrients;
        Self {
            datetime: TimestampProcessor::format(&meal.timestamp),
            logged_food: &meal.logged_food,
            calorie: n.calorie,
            total_carb: n.total_carb,
            dietary_fiber: n.dietary_fiber,
            sugar: n.sugar,
            protein: n.protein,
            total_fat: n.total_fat,
        }
    }
}

/// Serialize `meals` as CSV (header included) into any writer.
pub fn write_meals_to<W: Write>(writer: W, meals: &[MealAggregate]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if meals.is_empty() {
        // serde only emits the header alongside the first record.
        csv_writer.write_record(header())?;
    }
    for meal in meals {
        csv_writer.serialize(MealRecord::from(meal))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `meals` to `path`.
///
/// The CSV is written to a temporary sibling first and renamed into place,
/// so `path` is either fully replaced or left untouched.
pub fn write_meals(path: &Path, meals: &[MealAggregate]) -> Result<()> {
    let tmp = temp_path(path);
    let write_err = |source| MealError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let result = std::fs::File::create(&tmp)
        .map_err(write_err)
        .and_then(|file| write_meals_to(std::io::BufWriter::new(file), meals))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(write_err));

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    } else {
        debug!("Wrote {} meals to {}", meals.len(), path.display());
    }
    result
}

/// Output header: `datetime`, `logged_food`, then the canonical nutrients.
pub fn header() -> Vec<&'static str> {
    let mut columns = vec!["datetime", "logged_food"];
    columns.extend(meal_core::models::NUTRIENT_NAMES);
    columns
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "meals.csv".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
