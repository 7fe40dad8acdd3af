//! Host probing for available conversion engines. Probes are lightweight
//! existence checks with no side effects; an engine that cannot be confirmed
//! is simply reported unavailable.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::EngineKind;

/// Result of probing one engine. `detail` carries the resolved binary path
/// when the probe found one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineAvailability {
    pub engine: EngineKind,
    pub available: bool,
    pub detail: Option<String>,
}

/// Locate the LibreOffice binary: PATH first, then the well-known install
/// locations on Windows and macOS.
pub fn find_soffice() -> Option<PathBuf> {
    for cand in ["soffice", "libreoffice"] {
        if let Ok(path) = which::which(cand) {
            return Some(path);
        }
    }

    if cfg!(windows) {
        for cand in [
            r"C:\Program Files\LibreOffice\program\soffice.exe",
            r"C:\Program Files (x86)\LibreOffice\program\soffice.exe",
        ] {
            let path = Path::new(cand);
            if path.exists() {
                return Some(path.to_path_buf());
            }
        }
    }

    if cfg!(target_os = "macos") {
        let path = Path::new("/Applications/LibreOffice.app/Contents/MacOS/soffice");
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    None
}

/// Whether PowerPoint automation is likely usable: Windows with the scripting
/// bridge on PATH. Certainty only comes from actually driving the application.
pub fn powerpoint_available() -> bool {
    cfg!(windows) && which::which("powershell").is_ok()
}

/// Probe the host for every known engine.
pub fn detect() -> Vec<EngineAvailability> {
    let soffice = find_soffice();
    let powerpoint = powerpoint_available();

    vec![
        EngineAvailability {
            engine: EngineKind::LibreOffice,
            available: soffice.is_some(),
            detail: soffice.map(|p| p.display().to_string()),
        },
        EngineAvailability {
            engine: EngineKind::PowerPoint,
            available: powerpoint,
            detail: None,
        },
    ]
}

/// Human-readable detection report, one line per engine.
pub fn report() -> String {
    detect()
        .iter()
        .map(|a| {
            let status = if a.available { "FOUND" } else { "NOT FOUND" };
            match &a.detail {
                Some(detail) => format!("{}: {} ({})", a.engine, status, detail),
                None => format!("{}: {}", a.engine, status),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_reports_every_known_engine() {
        let availability = detect();
        assert_eq!(availability.len(), 2);
        assert!(
            availability
                .iter()
                .any(|a| a.engine == EngineKind::LibreOffice)
        );
        assert!(
            availability
                .iter()
                .any(|a| a.engine == EngineKind::PowerPoint)
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn powerpoint_is_never_available_off_windows() {
        assert!(!powerpoint_available());
    }

    #[test]
    fn report_has_one_line_per_engine() {
        assert_eq!(report().lines().count(), 2);
    }
}
