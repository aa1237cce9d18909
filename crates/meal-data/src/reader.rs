//! Food-log CSV loading for the meal aggregator.
//!
//! Reads a participant's raw food log in either the header-less positional
//! layout or the named layout and converts every row into a
//! [`FoodLogEntry`]. Any unparseable timestamp or nutrient value aborts the
//! whole read: a skipped row would silently change the nutrient totals.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use meal_core::error::{MealError, Result};
use meal_core::formatting::format_amount;
use meal_core::models::{FoodLogEntry, Layout, Nutrients, NUTRIENT_NAMES};
use meal_core::settings::DEFAULT_TIMESTAMP_COLUMN;
use meal_core::timestamps::TimestampProcessor;
use tracing::debug;

pub use meal_core::formatting::format_description;

// Fixed positional columns.
const POS_DATE: usize = 0;
const POS_TIME: usize = 1;
const POS_DATETIME: usize = 2;
const POS_FOOD_NAME: usize = 3;
const POS_AMOUNT: usize = 4;
const POS_UNIT: usize = 5;
/// First raw nutrient column; index 6 holds a free-form extra that is dropped.
const POS_FIRST_NUTRIENT: usize = 7;

const NAMED_FOOD_COLUMN: &str = "logged_food";
const NAMED_AMOUNT_COLUMN: &str = "amount";
const NAMED_UNIT_COLUMN: &str = "unit";

/// Cell values read as missing, the same set spreadsheet exports and pandas
/// use for "no value".
const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ── ReaderOptions ─────────────────────────────────────────────────────────────

/// How to interpret the columns of a food-log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub layout: Layout,
    /// Timestamp column for the named layout.
    pub timestamp_column: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Auto,
            timestamp_column: DEFAULT_TIMESTAMP_COLUMN.to_string(),
        }
    }
}

impl ReaderOptions {
    pub fn new(layout: Layout, timestamp_column: impl Into<String>) -> Self {
        Self {
            layout,
            timestamp_column: timestamp_column.into(),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and normalize the food log at `path`.
///
/// Fails with [`MealError::MissingInput`] when the file does not exist.
pub fn read_food_log(path: &Path, options: &ReaderOptions) -> Result<Vec<FoodLogEntry>> {
    if !path.exists() {
        return Err(MealError::MissingInput(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|source| MealError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_food_log(file, options)?;
    debug!("File {}: {} entries", path.display(), entries.len());
    Ok(entries)
}

/// Parse a food log from any reader. The whole input is buffered before
/// normalization starts.
pub fn parse_food_log<R: Read>(reader: R, options: &ReaderOptions) -> Result<Vec<FoodLogEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records: Vec<StringRecord> = csv_reader
        .records()
        .collect::<std::result::Result<_, csv::Error>>()?;

    let Some(first) = records.first() else {
        debug!("Food log is empty");
        return Ok(Vec::new());
    };

    let layout = resolve_layout(options, first);
    debug!("Reading {} records with {} layout", records.len(), layout);

    match layout {
        Layout::Named => parse_named(&records, &options.timestamp_column),
        Layout::Positional | Layout::Auto => records
            .iter()
            .enumerate()
            .map(|(idx, record)| parse_positional(record, idx))
            .collect(),
    }
}

/// Map raw nutrient values onto the canonical names by position.
///
/// Missing trailing values are 0.0 and values beyond the sixth are ignored.
pub fn map_positional_nutrients(raw: &[f64]) -> Nutrients {
    let mut values = [0.0; NUTRIENT_NAMES.len()];
    for (slot, value) in values.iter_mut().zip(raw) {
        *slot = *value;
    }
    Nutrients::from_values(values)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Resolve [`Layout::Auto`] by looking for a header row.
fn resolve_layout(options: &ReaderOptions, first: &StringRecord) -> Layout {
    match options.layout {
        Layout::Auto => {
            let wanted = normalize_header_name(&options.timestamp_column);
            let is_header = first
                .iter()
                .map(normalize_header_name)
                .any(|name| name == wanted || name == NAMED_FOOD_COLUMN);
            if is_header {
                Layout::Named
            } else {
                Layout::Positional
            }
        }
        explicit => explicit,
    }
}

fn normalize_header_name(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}

/// 1-based file line of `record`, falling back to its index.
fn line_of(record: &StringRecord, idx: usize) -> u64 {
    record
        .position()
        .map(|p| p.line())
        .unwrap_or(idx as u64 + 1)
}

/// Trimmed cell text, or `None` for blank cells and missing-value tokens.
fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty() && !MISSING_TOKENS.contains(s))
}

/// Parse an optional numeric cell. Blank and missing-value tokens are `None`;
/// anything else must be a finite decimal.
fn parse_number(cell: Option<&str>, line: u64, column: &str) -> Result<Option<f64>> {
    let Some(text) = non_blank(cell) else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(MealError::FieldParse {
            line,
            column: column.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Read an amount cell as a number plus the text shown in the description.
///
/// Numbers are re-rendered (`1.0` → `1`). Free-form quantities such as `1/2`
/// or `a handful` have no numeric amount and keep their text verbatim.
fn parse_amount(cell: Option<&str>, line: u64) -> (Option<f64>, Option<String>) {
    let Some(text) = non_blank(cell) else {
        return (None, None);
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => (Some(v), Some(format_amount(v))),
        _ => {
            debug!("Line {}: non-numeric amount {:?} kept as text", line, text);
            (None, Some(text.to_string()))
        }
    }
}

fn build_entry(
    timestamp: chrono::NaiveDateTime,
    food_name: &str,
    (amount, amount_text): (Option<f64>, Option<String>),
    unit: Option<&str>,
    nutrients: Nutrients,
) -> FoodLogEntry {
    FoodLogEntry {
        timestamp,
        food_name: food_name.to_string(),
        amount,
        unit: unit.map(str::to_string),
        description: format_description(amount_text.as_deref(), unit, food_name),
        nutrients,
    }
}

// ── Positional layout ─────────────────────────────────────────────────────────

fn parse_positional(record: &StringRecord, idx: usize) -> Result<FoodLogEntry> {
    let line = line_of(record, idx);

    if record.len() <= POS_FOOD_NAME {
        return Err(MealError::MissingColumn {
            line,
            column: "food_name".to_string(),
        });
    }

    let datetime = record.get(POS_DATETIME).unwrap_or_default();
    let parsed = if datetime.is_empty() {
        TimestampProcessor::parse_parts(
            record.get(POS_DATE).unwrap_or_default(),
            record.get(POS_TIME).unwrap_or_default(),
        )
    } else {
        TimestampProcessor::parse(datetime)
    };
    let timestamp = parsed.ok_or_else(|| MealError::TimestampParse {
        line,
        column: "datetime".to_string(),
        value: datetime.to_string(),
    })?;

    let amount = parse_amount(record.get(POS_AMOUNT), line);
    let unit = non_blank(record.get(POS_UNIT));

    // Columns past the sixth nutrient are never read.
    let raw: Vec<f64> = record
        .iter()
        .skip(POS_FIRST_NUTRIENT)
        .zip(NUTRIENT_NAMES)
        .map(|(cell, name)| -> Result<f64> {
            let value = parse_number(Some(cell), line, name)?;
            Ok(value.unwrap_or_default())
        })
        .collect::<Result<_>>()?;

    let food_name = record.get(POS_FOOD_NAME).unwrap_or_default();
    Ok(build_entry(
        timestamp,
        food_name,
        amount,
        unit,
        map_positional_nutrients(&raw),
    ))
}

// ── Named layout ──────────────────────────────────────────────────────────────

fn parse_named(records: &[StringRecord], timestamp_column: &str) -> Result<Vec<FoodLogEntry>> {
    let Some((header, rows)) = records.split_first() else {
        return Ok(Vec::new());
    };

    let header_map: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect();

    let header_line = line_of(header, 0);
    let require = |name: &str| {
        header_map
            .get(&normalize_header_name(name))
            .copied()
            .ok_or_else(|| MealError::MissingColumn {
                line: header_line,
                column: name.to_string(),
            })
    };

    let ts_col = require(timestamp_column)?;
    let food_col = require(NAMED_FOOD_COLUMN)?;
    let amount_col = header_map.get(NAMED_AMOUNT_COLUMN).copied();
    let unit_col = header_map.get(NAMED_UNIT_COLUMN).copied();
    let nutrient_cols: Vec<(&str, usize)> = NUTRIENT_NAMES
        .iter()
        .filter_map(|name| header_map.get(*name).map(|idx| (*name, *idx)))
        .collect();

    if nutrient_cols.len() < NUTRIENT_NAMES.len() {
        debug!(
            "Named layout has {} of {} nutrient columns; the rest default to 0.0",
            nutrient_cols.len(),
            NUTRIENT_NAMES.len()
        );
    }

    rows.iter()
        .enumerate()
        .map(|(idx, record)| -> Result<FoodLogEntry> {
            let line = line_of(record, idx + 1);
            let ts_cell = record.get(ts_col).unwrap_or_default();
            let timestamp =
                TimestampProcessor::parse(ts_cell).ok_or_else(|| MealError::TimestampParse {
                    line,
                    column: timestamp_column.to_string(),
                    value: ts_cell.to_string(),
                })?;

            let amount = parse_amount(amount_col.and_then(|c| record.get(c)), line);
            let unit = non_blank(unit_col.and_then(|c| record.get(c)));

            let mut nutrients = Nutrients::default();
            for (name, col) in &nutrient_cols {
                if let Some(value) = parse_number(record.get(*col), line, name)? {
                    nutrients.set(name, value);
                }
            }

            let food_name = record.get(food_col).unwrap_or_default();
            Ok(build_entry(timestamp, food_name, amount, unit, nutrients))
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn ts(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 2, 13)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn parse(text: &str, layout: Layout) -> Result<Vec<FoodLogEntry>> {
        parse_food_log(text.as_bytes(), &ReaderOptions::new(layout, "time_begin"))
    }

    fn write_csv(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    const POSITIONAL: &str = "\
2020-02-13,18:00:00,2020-02-13 18:00:00,rice,1,cup,,200,45,0.6,0.1,4.2,0.4
2020-02-13,18:00:00,2020-02-13 18:00:00,oil,2,tbsp,,80,0,0,0,0,9
2020-02-13,19:00:00,2020-02-13 19:00:00,apple,1,,,95,25,4.4,19,0.5,0.3
";

    const NAMED: &str = "\
time_begin,amount,unit,logged_food,calorie,total_carb,dietary_fiber,sugar,protein,total_fat
2020-02-13 18:00:00,1,cup,rice,200,45,0.6,0.1,4.2,0.4
2020-02-13 18:00:00,2,tbsp,oil,80,0,0,0,0,9
2020-02-13 19:00:00,,,apple,95,25,4.4,19,0.5,0.3
";

    // ── positional layout ─────────────────────────────────────────────────────

    #[test]
    fn test_positional_basic() {
        let entries = parse(POSITIONAL, Layout::Positional).unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].timestamp, ts(18, 0));
        assert_eq!(entries[0].food_name, "rice");
        assert_eq!(entries[0].amount, Some(1.0));
        assert_eq!(entries[0].unit.as_deref(), Some("cup"));
        assert_eq!(entries[0].description, "1 cup rice");
        assert_eq!(
            entries[0].nutrients.values(),
            [200.0, 45.0, 0.6, 0.1, 4.2, 0.4]
        );

        assert_eq!(entries[2].unit, None);
        assert_eq!(entries[2].description, "1 apple");
    }

    #[test]
    fn test_positional_pads_missing_nutrients() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,toast,2,slice,,150,28\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(
            entries[0].nutrients.values(),
            [150.0, 28.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_positional_without_nutrient_columns() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,water,1,glass,note\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].nutrients, Nutrients::default());
        assert_eq!(entries[0].description, "1 glass water");
    }

    #[test]
    fn test_positional_ignores_extra_nutrient_columns() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,egg,1,,,70,1,0,0,6,5,186,62\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(
            entries[0].nutrients.values(),
            [70.0, 1.0, 0.0, 0.0, 6.0, 5.0]
        );
    }

    #[test]
    fn test_positional_extra_column_is_dropped() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,egg,1,,boiled,70\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].description, "1 egg");
        assert_eq!(entries[0].nutrients.calorie, 70.0);
    }

    #[test]
    fn test_positional_blank_nutrient_is_zero() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,tea,1,cup,,2,,,0\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].nutrients.values(), [2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_positional_falls_back_to_date_and_time() {
        let text = "2020-02-13,07:30:00,,oats,0.5,cup,,150\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].timestamp, ts(7, 30));
    }

    #[test]
    fn test_positional_bad_timestamp_fails() {
        let text = "\
2020-02-13,18:00,2020-02-13 18:00:00,rice,1,cup,,200
2020-02-13,19:00,sometime,apple,1,,,95
";
        let err = parse(text, Layout::Positional).unwrap_err();
        match err {
            MealError::TimestampParse { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "datetime");
                assert_eq!(value, "sometime");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_positional_bad_number_fails() {
        let text = "2020-02-13,18:00,2020-02-13 18:00:00,rice,1,cup,,lots\n";
        let err = parse(text, Layout::Positional).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid number on line 1, column calorie: \"lots\""
        );
    }

    #[test]
    fn test_positional_bad_number_names_nutrient() {
        let text = "2020-02-13,18:00,2020-02-13 18:00:00,rice,1,cup,,200,45,0.6,some\n";
        let err = parse(text, Layout::Positional).unwrap_err();
        assert!(matches!(err, MealError::FieldParse { ref column, .. } if column == "sugar"));
    }

    #[test]
    fn test_positional_infinite_nutrient_fails() {
        let text = "2020-02-13,18:00,2020-02-13 18:00:00,rice,1,cup,,inf\n";
        let err = parse(text, Layout::Positional).unwrap_err();
        assert!(matches!(err, MealError::FieldParse { ref value, .. } if value == "inf"));
    }

    #[test]
    fn test_positional_ignores_text_beyond_nutrient_columns() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,egg,1,,,70,1,0,0,6,5,see notes\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(
            entries[0].nutrients.values(),
            [70.0, 1.0, 0.0, 0.0, 6.0, 5.0]
        );
    }

    #[test]
    fn test_positional_missing_value_tokens() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,egg,NaN,,,70,NaN\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].amount, None);
        assert_eq!(entries[0].description, "egg");
        assert_eq!(
            entries[0].nutrients.values(),
            [70.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_positional_missing_unit_token() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,toast,2,N/A,,80,null,NA,None,<NA>,#N/A\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].unit, None);
        assert_eq!(entries[0].description, "2 toast");
        assert_eq!(entries[0].nutrients.values(), [80.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_positional_fractional_amount_kept_as_text() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,milk,1/2,cup,,60\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].amount, None);
        assert_eq!(entries[0].description, "1/2 cup milk");
        assert_eq!(entries[0].nutrients.calorie, 60.0);
    }

    #[test]
    fn test_positional_amount_rendered_shortest() {
        let text = "2020-02-13,08:00,2020-02-13 08:00:00,rice,1.0,cup,,200\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].amount, Some(1.0));
        assert_eq!(entries[0].description, "1 cup rice");
    }

    #[test]
    fn test_positional_short_row_fails() {
        let err = parse("2020-02-13,18:00,2020-02-13 18:00:00\n", Layout::Positional).unwrap_err();
        assert!(matches!(err, MealError::MissingColumn { .. }));
    }

    #[test]
    fn test_positional_quoted_food_name_with_comma() {
        let text = "2020-02-13,18:00,2020-02-13 18:00:00,\"chicken, grilled\",4,oz,,180\n";
        let entries = parse(text, Layout::Positional).unwrap();
        assert_eq!(entries[0].description, "4 oz chicken, grilled");
    }

    // ── named layout ──────────────────────────────────────────────────────────

    #[test]
    fn test_named_basic() {
        let entries = parse(NAMED, Layout::Named).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].description, "2 tbsp oil");
        assert_eq!(entries[1].nutrients.total_fat, 9.0);
        assert_eq!(entries[2].amount, None);
        assert_eq!(entries[2].description, "apple");
    }

    #[test]
    fn test_named_missing_nutrient_columns_default_to_zero() {
        let text = "\
logged_food,time_begin,calorie,protein
banana,2020-02-13 10:00:00,105,1.3
";
        let entries = parse(text, Layout::Named).unwrap();
        assert_eq!(
            entries[0].nutrients.values(),
            [105.0, 0.0, 0.0, 0.0, 1.3, 0.0]
        );
        assert_eq!(entries[0].description, "banana");
    }

    #[test]
    fn test_named_missing_value_tokens() {
        let text = "\
time_begin,amount,unit,logged_food,calorie,sugar
2020-02-13 10:00:00,n/a,NULL,banana,105,nan
2020-02-13 10:00:00,a handful,,almonds,160,1.2
";
        let entries = parse(text, Layout::Named).unwrap();
        assert_eq!(entries[0].description, "banana");
        assert_eq!(entries[0].nutrients.sugar, 0.0);
        assert_eq!(entries[1].amount, None);
        assert_eq!(entries[1].description, "a handful almonds");
    }

    #[test]
    fn test_named_custom_timestamp_column() {
        let text = "\
datetime,logged_food,calorie
2020-02-13 10:00:00,banana,105
";
        let options = ReaderOptions::new(Layout::Named, "datetime");
        let entries = parse_food_log(text.as_bytes(), &options).unwrap();
        assert_eq!(entries[0].timestamp, ts(10, 0));
    }

    #[test]
    fn test_named_missing_timestamp_column_fails() {
        let text = "logged_food,calorie\nbanana,105\n";
        let err = parse(text, Layout::Named).unwrap_err();
        match err {
            MealError::MissingColumn { line, column } => {
                assert_eq!(line, 1);
                assert_eq!(column, "time_begin");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_named_bad_timestamp_reports_line() {
        let text = "\
time_begin,logged_food,calorie
2020-02-13 10:00:00,banana,105
later,apple,95
";
        let err = parse(text, Layout::Named).unwrap_err();
        assert!(matches!(err, MealError::TimestampParse { line: 3, .. }));
    }

    #[test]
    fn test_named_header_only() {
        let entries = parse("time_begin,logged_food\n", Layout::Named).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_named_header_with_bom_and_case() {
        let text = "\u{feff}Time_Begin,Logged_Food,Calorie\n2020-02-13 10:00:00,banana,105\n";
        let entries = parse(text, Layout::Named).unwrap();
        assert_eq!(entries[0].nutrients.calorie, 105.0);
    }

    // ── layout detection ──────────────────────────────────────────────────────

    #[test]
    fn test_auto_detects_named() {
        let entries = parse(NAMED, Layout::Auto).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].description, "1 cup rice");
    }

    #[test]
    fn test_auto_detects_positional() {
        let entries = parse(POSITIONAL, Layout::Auto).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].nutrients.calorie, 95.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("", Layout::Auto).unwrap().is_empty());
    }

    // ── map_positional_nutrients ──────────────────────────────────────────────

    #[test]
    fn test_map_positional_nutrients() {
        assert_eq!(map_positional_nutrients(&[]), Nutrients::default());
        assert_eq!(
            map_positional_nutrients(&[1.0, 2.0, 3.0]).values(),
            [1.0, 2.0, 3.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            map_positional_nutrients(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).values(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    // ── read_food_log ─────────────────────────────────────────────────────────

    #[test]
    fn test_read_food_log_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "Food_Log_001.csv", POSITIONAL);

        let entries = read_food_log(&path, &ReaderOptions::default()).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_read_food_log_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Food_Log_404.csv");

        let err = read_food_log(&path, &ReaderOptions::default()).unwrap_err();
        assert!(matches!(err, MealError::MissingInput(p) if p == path));
    }
}
