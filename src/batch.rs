//! Batch run over the configured asset files.
//!
//! Each listed file ends up recolored, skipped as missing, or failed. None of
//! these outcomes stops the batch.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use crate::error::RecolorError;
use crate::recolor::recolor;
use crate::settings::BatchSettings;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Recolored { changed: usize },
    Missing,
    Failed { error: RecolorError },
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    /// Sum over recolored files only
    pub total_changed: usize,
}

impl BatchReport {
    pub fn recolored_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Recolored { .. }))
    }

    pub fn missing_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Missing))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Recolor every listed file in place, in order.
///
/// Output path is always the input path; the original pixels are gone once
/// a file has been written.
pub fn run_batch(settings: &BatchSettings) -> BatchReport {
    let mut report = BatchReport::default();

    for (file, path) in settings.files.iter().zip(settings.resolved_paths()) {
        let outcome = if !path.exists() {
            warn!("File not found: {}", path.display());
            FileOutcome::Missing
        } else {
            info!("Processing: {}", path.display());
            match recolor(&path, &path, &settings.recolor) {
                Ok(changed) => {
                    info!("Saved: {} ({} pixels changed)", path.display(), changed);
                    report.total_changed += changed;
                    FileOutcome::Recolored { changed }
                }
                Err(e) => {
                    error!("Error processing {}: {}", file, e);
                    FileOutcome::Failed { error: e }
                }
            }
        };

        report.files.push(FileReport {
            file: file.clone(),
            path,
            outcome,
        });
    }

    report
}

// ============================================================================
// TESTS
// ============================================================================
