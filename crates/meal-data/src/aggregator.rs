//! Meal aggregation: one row per exact timestamp.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use meal_core::models::{FoodLogEntry, MealAggregate, Nutrients};

// ── MealTotals ────────────────────────────────────────────────────────────────

/// Nutrient totals accumulated across many entries or meals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealTotals {
    pub nutrients: Nutrients,
    /// Number of food-log entries folded in.
    pub entry_count: usize,
    /// Number of meals folded in (zero when summing raw entries).
    pub meal_count: usize,
}

// ── MealAggregator ────────────────────────────────────────────────────────────

/// Stateless helper that groups food-log entries into meals.
pub struct MealAggregator;

impl MealAggregator {
    /// Group `entries` by exact timestamp.
    ///
    /// Returns meals sorted by timestamp (ascending). Within a meal,
    /// descriptions keep the relative order of `entries`.
    pub fn aggregate(entries: &[FoodLogEntry]) -> Vec<MealAggregate> {
        // BTreeMap keeps the keys sorted.
        let mut map: BTreeMap<NaiveDateTime, MealAggregate> = BTreeMap::new();

        for entry in entries {
            map.entry(entry.timestamp)
                .or_insert_with(|| MealAggregate::new(entry.timestamp))
                .add_entry(entry);
        }

        map.into_values().collect()
    }

    /// Sum the nutrients of all meals into a single [`MealTotals`].
    pub fn calculate_totals(meals: &[MealAggregate]) -> MealTotals {
        let mut totals = MealTotals::default();
        for meal in meals {
            totals.nutrients += &meal.nutrients;
            totals.entry_count += meal.entry_count;
            totals.meal_count += 1;
        }
        totals
    }

    /// Sum the nutrients of raw entries, for comparing against
    /// [`MealAggregator::calculate_totals`].
    pub fn entry_totals(entries: &[FoodLogEntry]) -> MealTotals {
        let mut totals = MealTotals::default();
        for entry in entries {
            totals.nutrients += &entry.nutrients;
            totals.entry_count += 1;
        }
        totals
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
