//! Conversion engines: external programs that turn a presentation into a PDF.
//! Provides the `Engine` trait, host probing (`detect`), and the concrete
//! LibreOffice and PowerPoint implementations.
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{EngineChoice, EngineKind};

pub mod detect;
pub mod libreoffice;
pub mod powerpoint;

pub use detect::{EngineAvailability, detect};
pub use libreoffice::LibreOfficeEngine;
pub use powerpoint::PowerPointEngine;

/// A one-shot converter. Implementations invoke an external program and report
/// success or failure; they never retry.
pub trait Engine {
    fn kind(&self) -> EngineKind;

    /// Convert `input` into a PDF inside `output_dir` and return the path of
    /// the produced file.
    fn convert(&self, input: &Path, output_dir: &Path) -> Result<PathBuf>;
}

/// Decide which engine kind a selection maps to, given what the host offers.
/// `Auto` prefers the automation engine when its platform supports it.
pub fn choose(
    choice: EngineChoice,
    libreoffice_available: bool,
    powerpoint_available: bool,
) -> Result<EngineKind> {
    match choice {
        EngineChoice::LibreOffice => {
            if libreoffice_available {
                Ok(EngineKind::LibreOffice)
            } else {
                Err(Error::EngineNotFound(
                    "LibreOffice not found. Install LibreOffice or switch engine.".to_string(),
                ))
            }
        }
        EngineChoice::PowerPoint => {
            if powerpoint_available {
                Ok(EngineKind::PowerPoint)
            } else {
                Err(Error::EngineNotFound(
                    "PowerPoint automation not available on this host.".to_string(),
                ))
            }
        }
        EngineChoice::Auto => {
            if powerpoint_available {
                Ok(EngineKind::PowerPoint)
            } else if libreoffice_available {
                Ok(EngineKind::LibreOffice)
            } else {
                Err(Error::EngineNotFound(
                    "No conversion engine found. Install LibreOffice or (on Windows) PowerPoint."
                        .to_string(),
                ))
            }
        }
    }
}

/// Resolve a selection against the actual host environment.
pub fn resolve(choice: EngineChoice) -> Result<Box<dyn Engine>> {
    let soffice = detect::find_soffice();
    let powerpoint = detect::powerpoint_available();

    match choose(choice, soffice.is_some(), powerpoint)? {
        EngineKind::LibreOffice => {
            // choose() only returns LibreOffice when the probe succeeded
            let soffice = soffice.ok_or_else(|| {
                Error::EngineNotFound("LibreOffice binary disappeared during probe".to_string())
            })?;
            Ok(Box::new(LibreOfficeEngine::new(soffice)))
        }
        EngineKind::PowerPoint => Ok(Box::new(PowerPointEngine::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_prefers_powerpoint_when_both_available() {
        assert_eq!(
            choose(EngineChoice::Auto, true, true).unwrap(),
            EngineKind::PowerPoint
        );
    }

    #[test]
    fn auto_falls_back_to_libreoffice() {
        assert_eq!(
            choose(EngineChoice::Auto, true, false).unwrap(),
            EngineKind::LibreOffice
        );
    }

    #[test]
    fn auto_with_no_engines_is_an_error() {
        assert!(matches!(
            choose(EngineChoice::Auto, false, false),
            Err(Error::EngineNotFound(_))
        ));
    }

    #[test]
    fn explicit_selection_requires_that_engine() {
        assert_eq!(
            choose(EngineChoice::LibreOffice, true, true).unwrap(),
            EngineKind::LibreOffice
        );
        assert!(matches!(
            choose(EngineChoice::LibreOffice, false, true),
            Err(Error::EngineNotFound(_))
        ));
        assert!(matches!(
            choose(EngineChoice::PowerPoint, true, false),
            Err(Error::EngineNotFound(_))
        ));
    }
}
