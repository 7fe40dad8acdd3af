//! LibreOffice engine: drives the `soffice` binary in headless mode, one
//! invocation per input file. Success is judged by the exit status plus the
//! presence of the produced PDF.
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{EngineKind, derive_output_path};

use super::Engine;

pub struct LibreOfficeEngine {
    soffice: PathBuf,
}

impl LibreOfficeEngine {
    pub fn new(soffice: PathBuf) -> Self {
        Self { soffice }
    }

    /// Probe the host and construct the engine, or fail with `EngineNotFound`.
    pub fn locate() -> Result<Self> {
        super::detect::find_soffice()
            .map(Self::new)
            .ok_or_else(|| {
                Error::EngineNotFound(
                    "LibreOffice not found. Install LibreOffice or switch engine.".to_string(),
                )
            })
    }

    pub fn soffice_path(&self) -> &Path {
        &self.soffice
    }

    /// LibreOffice keeps the source base name but may alter it slightly (case
    /// of the extension, appended counters). When the expected file is absent,
    /// take the newest `<stem>*.pdf` in the output directory.
    fn find_produced_pdf(expected: &Path, stem: &str, output_dir: &Path) -> Option<PathBuf> {
        if expected.exists() {
            return Some(expected.to_path_buf());
        }

        let mut candidates: Vec<PathBuf> = std::fs::read_dir(output_dir)
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
            })
            .filter(|p| {
                p.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.starts_with(stem))
                    .unwrap_or(false)
            })
            .collect();

        candidates.sort_by_key(|p| {
            p.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });
        candidates.pop()
    }
}

impl Engine for LibreOfficeEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::LibreOffice
    }

    fn convert(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        if !input.is_file() {
            return Err(Error::InvalidInput {
                path: input.to_path_buf(),
                reason: "not a readable file".to_string(),
            });
        }

        debug!("Invoking {:?} for {:?}", self.soffice, input);
        let output = Command::new(&self.soffice)
            .arg("--headless")
            .arg("--nologo")
            .arg("--nodefault")
            .arg("--invisible")
            .arg("--nofirststartwizard")
            .arg("--convert-to")
            .arg("pdf")
            .arg(input)
            .arg("--outdir")
            .arg(output_dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ConversionFailed(format!(
                "soffice exited with {} for {:?}: {}",
                output.status,
                input,
                stderr.trim()
            )));
        }

        let expected = derive_output_path(input, output_dir);
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        match Self::find_produced_pdf(&expected, &stem, output_dir) {
            Some(path) => {
                if path != expected {
                    warn!("Produced PDF landed at {:?} instead of {:?}", path, expected);
                }
                Ok(path)
            }
            None => Err(Error::OutputWrite(format!(
                "expected PDF not found for {:?}",
                input
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn fake_soffice(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("soffice");
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    // A stand-in that honors the real argument shape: it walks the args,
    // pulls the input path and the --outdir value, and touches the PDF.
    #[cfg(unix)]
    const CONVERTING_STUB: &str = r#"#!/bin/sh
out=""
in=""
while [ $# -gt 0 ]; do
  case "$1" in
    --outdir) out="$2"; shift 2 ;;
    --*) shift ;;
    pdf) shift ;;
    *) in="$1"; shift ;;
  esac
done
base=$(basename "$in")
: > "$out/${base%.*}.pdf"
"#;

    #[cfg(unix)]
    #[test]
    fn successful_invocation_yields_expected_pdf() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");
        fs::create_dir(&out_dir).unwrap();
        let input = tmp.path().join("talk.pptx");
        fs::write(&input, b"stub").unwrap();

        let engine = LibreOfficeEngine::new(fake_soffice(tmp.path(), CONVERTING_STUB));
        let pdf = engine.convert(&input, &out_dir).unwrap();
        assert_eq!(pdf, out_dir.join("talk.pdf"));
        assert!(pdf.exists());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_surfaces_stderr_in_the_error() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("talk.pptx");
        fs::write(&input, b"stub").unwrap();

        let engine = LibreOfficeEngine::new(fake_soffice(
            tmp.path(),
            "#!/bin/sh\necho 'source file could not be loaded' >&2\nexit 1\n",
        ));
        let err = engine.convert(&input, tmp.path()).unwrap_err();
        match err {
            Error::ConversionFailed(msg) => {
                assert!(msg.contains("source file could not be loaded"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn clean_exit_without_pdf_is_an_output_error() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("talk.pptx");
        fs::write(&input, b"stub").unwrap();

        let engine = LibreOfficeEngine::new(fake_soffice(tmp.path(), "#!/bin/sh\nexit 0\n"));
        assert!(matches!(
            engine.convert(&input, tmp.path()),
            Err(Error::OutputWrite(_))
        ));
    }

    #[test]
    fn missing_input_is_rejected_before_spawning() {
        let tmp = tempfile::tempdir().unwrap();
        let engine = LibreOfficeEngine::new(PathBuf::from("soffice-that-does-not-exist"));
        assert!(matches!(
            engine.convert(&tmp.path().join("gone.pptx"), tmp.path()),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn fallback_picks_stem_matched_pdf() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("talk.PDF"), b"pdf").unwrap();
        fs::write(tmp.path().join("other.pdf"), b"pdf").unwrap();

        let found =
            LibreOfficeEngine::find_produced_pdf(&tmp.path().join("talk.pdf"), "talk", tmp.path());
        assert_eq!(found, Some(tmp.path().join("talk.PDF")));
    }
}
