//! High-level, ergonomic library API: convert one presentation, or run a whole
//! batch from a set of files and folders. Prefer these entrypoints over the
//! low-level `engines`/`batch` modules when embedding DECKPRESS.
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use tracing::info;

use crate::batch::{self, BatchEvent, BatchReport};
use crate::engines;
use crate::error::{Error, Result};
use crate::types::{ConversionJob, EngineChoice};

/// Convert a single presentation into `output_dir`, resolving `choice` against
/// the host. Returns the path of the produced PDF.
pub fn convert_file(input: &Path, output_dir: &Path, choice: EngineChoice) -> Result<PathBuf> {
    let engine = engines::resolve(choice)?;
    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::OutputWrite(format!("cannot create {:?}: {}", output_dir, e)))?;
    engine.convert(input, output_dir)
}

/// Expand `inputs` (files and/or folders), then convert everything found into
/// `output_dir` sequentially. `cancel` is checked between jobs; `on_event`
/// receives per-job progress. Returns the end-of-batch report.
pub fn run_batch(
    inputs: &[PathBuf],
    recursive: bool,
    output_dir: &Path,
    choice: EngineChoice,
    cancel: &AtomicBool,
    on_event: impl FnMut(BatchEvent),
) -> Result<BatchReport> {
    let mut jobs = batch::build_queue(inputs, recursive, output_dir)?;
    if jobs.is_empty() {
        return Err(Error::InvalidInput {
            path: inputs.first().cloned().unwrap_or_default(),
            reason: "no presentation files found in the selection".to_string(),
        });
    }

    let engine = engines::resolve(choice)?;
    info!("Using engine: {}", engine.kind());
    info!("Found {} presentation(s)", jobs.len());

    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::OutputWrite(format!("cannot create {:?}: {}", output_dir, e)))?;

    Ok(batch::run(engine.as_ref(), &mut jobs, cancel, on_event))
}

/// Expand inputs without converting; what the batch would process.
pub fn preview_queue(
    inputs: &[PathBuf],
    recursive: bool,
    output_dir: &Path,
) -> Result<Vec<ConversionJob>> {
    batch::build_queue(inputs, recursive, output_dir)
}
