mod bootstrap;
mod summary;

use anyhow::{Context, Result};
use meal_core::settings::Settings;
use meal_data::pipeline::{convert_all, convert_one, ConvertOptions};
use meal_data::reader::ReaderOptions;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;
    settings.validate()?;

    tracing::info!("Meal aggregator v{} starting", env!("CARGO_PKG_VERSION"));

    let layout = settings.layout()?;
    tracing::info!(
        "Data root: {}, layout: {}",
        settings.data_root.display(),
        layout
    );

    let options = ConvertOptions {
        reader: ReaderOptions::new(layout, settings.timestamp_column.clone()),
        output_name: settings.output_name.trim().to_string(),
        dry_run: settings.dry_run,
    };

    let reports = match settings.participant_id()? {
        Some(id) => {
            let report = convert_one(&settings.data_root, id, &options)
                .with_context(|| format!("Failed to aggregate participant {}", id))?;
            vec![report]
        }
        None => convert_all(&settings.data_root, &options).with_context(|| {
            format!(
                "Failed to aggregate participants under {}",
                settings.data_root.display()
            )
        })?,
    };

    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print!("{}", summary::render_summary(report, settings.preview_rows));
        tracing::debug!(
            "Participant {}: load {:.3}s, transform {:.3}s",
            report.paths.id,
            report.load_time_seconds,
            report.transform_time_seconds
        );
    }

    Ok(())
}
