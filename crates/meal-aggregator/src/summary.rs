use meal_core::formatting::{format_number, preview_table};
use meal_core::timestamps::TimestampProcessor;
use meal_data::pipeline::ConversionReport;

/// Build the console summary for one participant: confirmation line, span of
/// meals, calorie total and a preview of the first `preview_rows` meals.
pub fn render_summary(report: &ConversionReport, preview_rows: usize) -> String {
    let mut out = String::new();

    if report.written {
        out.push_str(&format!("Wrote: {}\n", report.paths.output.display()));
    } else {
        out.push_str(&format!(
            "Dry run for participant {} (nothing written)\n",
            report.paths.id
        ));
    }

    out.push_str(&format!(
        "{} entries → {} meals, {} kcal total\n",
        report.entries_read,
        report.meals.len(),
        format_number(report.totals.nutrients.calorie, 1)
    ));

    if let (Some(first), Some(last)) = (report.meals.first(), report.meals.last()) {
        out.push_str(&format!(
            "From {} to {}\n",
            TimestampProcessor::format(&first.timestamp),
            TimestampProcessor::format(&last.timestamp)
        ));
    }

    let table = preview_table(&report.meals, preview_rows);
    if !table.is_empty() {
        out.push('\n');
        out.push_str(&table);
    }
    out
}
