use std::sync::OnceLock;

use regex::Regex;

use crate::models::{MealAggregate, NUTRIENT_NAMES};
use crate::timestamps::TimestampProcessor;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("regex is valid"))
}

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// ```
/// use meal_core::formatting::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  1   cup\trice "), "1 cup rice");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    whitespace_run().replace_all(s, " ").trim().to_string()
}

/// Render a logged amount without a trailing `.0` and without grouping.
///
/// ```
/// use meal_core::formatting::format_amount;
///
/// assert_eq!(format_amount(1.0), "1");
/// assert_eq!(format_amount(0.5), "0.5");
/// assert_eq!(format_amount(1500.0), "1500");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}

/// Build the display string for one food-log row: `"{amount} {unit} {food}"`.
///
/// `amount` is the text to show, already rendered with [`format_amount`] when
/// the cell was numeric. Absent or blank parts are left out and the result is
/// whitespace-collapsed.
///
/// ```
/// use meal_core::formatting::format_description;
///
/// assert_eq!(format_description(Some("2"), Some("tbsp"), "oil"), "2 tbsp oil");
/// assert_eq!(format_description(Some("1/2"), Some("cup"), "milk"), "1/2 cup milk");
/// assert_eq!(format_description(None, Some("slice"), "bread"), "slice bread");
/// assert_eq!(format_description(None, None, " apple "), "apple");
/// ```
pub fn format_description(amount: Option<&str>, unit: Option<&str>, food_name: &str) -> String {
    let amount = amount.unwrap_or_default();
    let unit = unit.unwrap_or_default();
    collapse_whitespace(&format!("{} {} {}", amount, unit, food_name))
}

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// ```
/// use meal_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let fixed = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut result = group_thousands(int_part);
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }

    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", result)
    } else {
        result
    }
}

/// Truncate `s` to at most `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('…');
    out
}

// ── Preview table ─────────────────────────────────────────────────────────────

const PREVIEW_FOOD_WIDTH: usize = 40;

/// Render the first `rows` meals as a plain-text table for the console.
///
/// Returns an empty string when `rows` is zero or there are no meals.
pub fn preview_table(meals: &[MealAggregate], rows: usize) -> String {
    if rows == 0 || meals.is_empty() {
        return String::new();
    }

    let mut header: Vec<String> = vec!["datetime".to_string(), "logged_food".to_string()];
    header.extend(NUTRIENT_NAMES.iter().map(|n| n.to_string()));

    let body: Vec<Vec<String>> = meals
        .iter()
        .take(rows)
        .map(|meal| {
            let mut cells = vec![
                TimestampProcessor::format(&meal.timestamp),
                truncate(&meal.logged_food, PREVIEW_FOOD_WIDTH),
            ];
            cells.extend(meal.nutrients.values().iter().map(|v| format_number(*v, 1)));
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            body.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(body.iter()) {
        let cells: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                // Text columns left-aligned, numbers right-aligned.
                if col < 2 {
                    format!("{:<width$}", cell, width = widths[col])
                } else {
                    format!("{:>width$}", cell, width = widths[col])
                }
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in s.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
