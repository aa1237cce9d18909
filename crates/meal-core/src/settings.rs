use clap::Parser;
use std::path::PathBuf;

use crate::error::{MealError, Result};
use crate::models::{Layout, ParticipantId};

/// Default name of the aggregated output file inside a participant folder.
pub const DEFAULT_OUTPUT_NAME: &str = "Food_Meal_Aggregated.csv";

/// Default timestamp column for the named layout.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "time_begin";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Collapse a participant's food log into one row per meal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "meal-aggregator",
    about = "Collapse a participant's food log into one row per meal",
    version
)]
pub struct Settings {
    /// Participant id, e.g. 3 or 003
    pub participant: Option<String>,

    /// Directory holding the data_p<N> participant folders
    #[arg(long, default_value = ".")]
    pub data_root: PathBuf,

    /// Input column layout
    #[arg(long, default_value = "auto", value_parser = ["positional", "named", "auto"])]
    pub layout: String,

    /// Timestamp column used by the named layout
    #[arg(long, default_value = DEFAULT_TIMESTAMP_COLUMN)]
    pub timestamp_column: String,

    /// Output file name, written next to the input file
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// Number of aggregated rows to preview after a run (0 disables)
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,

    /// Process every data_p<N> folder under the data root
    #[arg(long)]
    pub all: bool,

    /// Aggregate and preview without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Fallible variant of [`Settings::load_from`] for callers that want to
    /// handle clap errors themselves.
    pub fn try_load_from<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Check combinations clap cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        match (&self.participant, self.all) {
            (None, false) => {
                return Err(MealError::Config(
                    "a participant id is required unless --all is given".to_string(),
                ))
            }
            (Some(_), true) => {
                return Err(MealError::Config(
                    "a participant id cannot be combined with --all".to_string(),
                ))
            }
            _ => {}
        }

        if let Some(raw) = &self.participant {
            ParticipantId::parse(raw)?;
        }

        let name = self.output_name.trim();
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(MealError::Config(format!(
                "output name must be a plain file name: {:?}",
                self.output_name
            )));
        }

        if self.timestamp_column.trim().is_empty() {
            return Err(MealError::Config(
                "timestamp column cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The selected input layout.
    pub fn layout(&self) -> Result<Layout> {
        Layout::parse(&self.layout)
    }

    /// The parsed participant id, if one was given.
    pub fn participant_id(&self) -> Result<Option<ParticipantId>> {
        self.participant
            .as_deref()
            .map(ParticipantId::parse)
            .transpose()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
