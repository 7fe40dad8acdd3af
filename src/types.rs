//! Shared types and enums used across DECKPRESS.
//! Includes `EngineKind`, `EngineChoice`, the `ConversionJob` record with its
//! `JobStatus` lifecycle, and the supported-extension helpers.
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// File extensions accepted as presentation inputs (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["ppt", "pptx"];

/// True when `path` carries one of the supported presentation extensions.
pub fn is_presentation_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == e)
        })
        .unwrap_or(false)
}

/// A concrete conversion engine installed on the host.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum EngineKind {
    LibreOffice,
    PowerPoint,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::LibreOffice => write!(f, "LibreOffice"),
            EngineKind::PowerPoint => write!(f, "PowerPoint"),
        }
    }
}

/// User-facing engine selection; `Auto` resolves to a concrete engine at run time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum EngineChoice {
    Auto,
    LibreOffice,
    PowerPoint,
}

impl std::fmt::Display for EngineChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineChoice::Auto => write!(f, "Auto"),
            EngineChoice::LibreOffice => write!(f, "LibreOffice"),
            EngineChoice::PowerPoint => write!(f, "PowerPoint"),
        }
    }
}

/// Lifecycle of a job; only advances Pending -> Running -> {Succeeded, Failed}.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "Pending"),
            JobStatus::Running => write!(f, "Running"),
            JobStatus::Succeeded => write!(f, "Succeeded"),
            JobStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// One enqueued conversion: a source presentation and its derived output path.
#[derive(Clone, Debug)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub output: PathBuf,
    pub status: JobStatus,
    pub error: Option<String>,
}

impl ConversionJob {
    /// Build a pending job. The output path is derived from the source stem and
    /// the output directory, independent of the engine that will run it.
    pub fn new(source: PathBuf, output_dir: &Path) -> Self {
        let output = derive_output_path(&source, output_dir);
        Self {
            source,
            output,
            status: JobStatus::Pending,
            error: None,
        }
    }
}

/// `output_dir/<source stem>.pdf`. Engines that write the file themselves are
/// expected to land on the same name.
pub fn derive_output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| source.as_os_str().to_os_string());
    output_dir.join(stem).with_extension("pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_presentation_file(Path::new("deck.pptx")));
        assert!(is_presentation_file(Path::new("deck.PPT")));
        assert!(is_presentation_file(Path::new("/a/b/Deck.PpTx")));
        assert!(!is_presentation_file(Path::new("deck.pdf")));
        assert!(!is_presentation_file(Path::new("deck")));
        assert!(!is_presentation_file(Path::new("pptx")));
    }

    #[test]
    fn output_path_is_stem_plus_pdf_in_output_dir() {
        let out = derive_output_path(Path::new("/in/slides.pptx"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/slides.pdf"));

        // Same derivation regardless of source extension
        let out = derive_output_path(Path::new("/in/slides.ppt"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/slides.pdf"));
    }

    #[test]
    fn job_starts_pending_without_error() {
        let job = ConversionJob::new(PathBuf::from("/in/a.pptx"), Path::new("/out"));
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.output, PathBuf::from("/out/a.pdf"));
        assert!(job.error.is_none());
    }
}
