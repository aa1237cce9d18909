//! Participant folder layout and discovery.
//!
//! A study directory holds one `data_p{N}` folder per participant, each with
//! a raw `Food_Log_{NNN}.csv` and, after a run, the aggregated output.

use std::path::{Path, PathBuf};

use meal_core::models::ParticipantId;
use tracing::{debug, warn};

/// Resolved file locations for one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantPaths {
    pub id: ParticipantId,
    pub folder: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ParticipantPaths {
    /// Derive the folder, input and output paths for `id` under `data_root`.
    pub fn new(data_root: &Path, id: ParticipantId, output_name: &str) -> Self {
        let folder = data_root.join(id.folder_name());
        Self {
            id,
            input: folder.join(id.input_file_name()),
            output: folder.join(output_name),
            folder,
        }
    }
}

/// Find all participant folders directly under `data_root`, sorted by id.
///
/// Only directories named `data_p<digits>` count; anything else is ignored.
pub fn discover_participants(data_root: &Path) -> Vec<ParticipantId> {
    if !data_root.exists() {
        warn!("Data root does not exist: {}", data_root.display());
        return Vec::new();
    }

    let mut ids: Vec<ParticipantId> = walkdir::WalkDir::new(data_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let id = participant_from_folder(&name);
            if id.is_none() {
                debug!("Skipping non-participant folder {}", name);
            }
            id
        })
        .collect();

    ids.sort();
    ids.dedup();
    ids
}

/// Parse `data_p12` into participant 12.
fn participant_from_folder(name: &str) -> Option<ParticipantId> {
    let digits = name.strip_prefix("data_p")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    ParticipantId::parse(digits).ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
