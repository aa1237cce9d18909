use std::fmt;
use std::ops::AddAssign;

use chrono::NaiveDateTime;

use crate::error::{MealError, Result};

/// Canonical nutrient columns, in output order.
pub const NUTRIENT_NAMES: [&str; 6] = [
    "calorie",
    "total_carb",
    "dietary_fiber",
    "sugar",
    "protein",
    "total_fat",
];

/// The six canonical nutrient values carried by every entry and meal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    pub calorie: f64,
    pub total_carb: f64,
    pub dietary_fiber: f64,
    pub sugar: f64,
    pub protein: f64,
    pub total_fat: f64,
}

impl Nutrients {
    /// Build from values in [`NUTRIENT_NAMES`] order.
    pub fn from_values(values: [f64; 6]) -> Self {
        let [calorie, total_carb, dietary_fiber, sugar, protein, total_fat] = values;
        Self {
            calorie,
            total_carb,
            dietary_fiber,
            sugar,
            protein,
            total_fat,
        }
    }

    /// Values in [`NUTRIENT_NAMES`] order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.calorie,
            self.total_carb,
            self.dietary_fiber,
            self.sugar,
            self.protein,
            self.total_fat,
        ]
    }

    /// Look up a nutrient by its canonical column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        NUTRIENT_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.values()[idx])
    }

    /// Set a nutrient by its canonical column name. Returns `false` for
    /// names outside the canonical set.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            "calorie" => &mut self.calorie,
            "total_carb" => &mut self.total_carb,
            "dietary_fiber" => &mut self.dietary_fiber,
            "sugar" => &mut self.sugar,
            "protein" => &mut self.protein,
            "total_fat" => &mut self.total_fat,
            _ => return false,
        };
        *slot = value;
        true
    }
}

impl AddAssign<&Nutrients> for Nutrients {
    fn add_assign(&mut self, other: &Nutrients) {
        self.calorie += other.calorie;
        self.total_carb += other.total_carb;
        self.dietary_fiber += other.dietary_fiber;
        self.sugar += other.sugar;
        self.protein += other.protein;
        self.total_fat += other.total_fat;
    }
}

/// How the columns of a raw food-log CSV are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Header-less: date, time, datetime, food_name, amount, unit, extra,
    /// then raw nutrient columns by position.
    Positional,
    /// Header row with `time_begin`, `amount`, `unit`, `logged_food` and
    /// canonical nutrient names.
    Named,
    /// Pick `Named` when the first row contains the timestamp column name.
    Auto,
}

impl Layout {
    /// Parse a layout name as accepted on the command line.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "named" => Ok(Self::Named),
            "auto" => Ok(Self::Auto),
            other => Err(MealError::Config(format!("unknown layout: {}", other))),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positional => "positional",
            Self::Named => "named",
            Self::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// A single food item read from a participant's food log.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodLogEntry {
    /// When the item was eaten (wall-clock time, no timezone).
    pub timestamp: NaiveDateTime,
    /// Free-text food name as logged.
    pub food_name: String,
    /// Quantity eaten, if recorded as a number. Free-form quantities such as
    /// `1/2` only appear in `description`.
    pub amount: Option<f64>,
    /// Unit for `amount`, if recorded.
    pub unit: Option<String>,
    /// Display string built from amount, unit and food name.
    pub description: String,
    /// Nutrient values; absent source columns are 0.0.
    pub nutrients: Nutrients,
}

/// All entries sharing one exact timestamp, collapsed into one meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealAggregate {
    /// The group key.
    pub timestamp: NaiveDateTime,
    /// Member descriptions joined with `", "`, in input order.
    pub logged_food: String,
    /// Per-nutrient sums over the group.
    pub nutrients: Nutrients,
    /// Number of entries folded into this meal.
    pub entry_count: usize,
}

impl MealAggregate {
    /// Start a new meal at `timestamp` with no members.
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            logged_food: String::new(),
            nutrients: Nutrients::default(),
            entry_count: 0,
        }
    }

    /// Fold `entry` into this meal. The caller guarantees matching timestamps.
    pub fn add_entry(&mut self, entry: &FoodLogEntry) {
        if !self.logged_food.is_empty() {
            self.logged_food.push_str(", ");
        }
        self.logged_food.push_str(&entry.description);
        self.nutrients += &entry.nutrients;
        self.entry_count += 1;
    }
}

/// A participant identifier such as `"3"` or `"003"`.
///
/// Input files use the zero-padded form (`Food_Log_003.csv`) while folders
/// use the integer form (`data_p3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(u32);

impl ParticipantId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a user-supplied identifier. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(MealError::InvalidParticipant(raw.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| MealError::InvalidParticipant(raw.to_string()))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Zero-padded to at least three digits: `3` → `"003"`.
    pub fn padded(&self) -> String {
        format!("{:03}", self.0)
    }

    /// Per-participant folder name: `3` → `"data_p3"`.
    pub fn folder_name(&self) -> String {
        format!("data_p{}", self.0)
    }

    /// Raw food-log file name: `3` → `"Food_Log_003.csv"`.
    pub fn input_file_name(&self) -> String {
        format!("Food_Log_{}.csv", self.padded())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.padded())
    }
}
