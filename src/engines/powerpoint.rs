//! PowerPoint engine: drives the installed PowerPoint application through its
//! automation interface (Windows only). The application is asked to open the
//! presentation without a window, export it as PDF, and close it again; the
//! whole exchange maps onto the same run-and-capture shape as the CLI engine.
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{EngineKind, derive_output_path};

use super::Engine;

/// `ppSaveAsPDF` in the PowerPoint automation object model.
const SAVE_AS_PDF: u32 = 32;

pub struct PowerPointEngine;

impl PowerPointEngine {
    pub fn new() -> Self {
        Self
    }

    fn escape_single_quoted(path: &Path) -> String {
        path.display().to_string().replace('\'', "''")
    }

    /// Script handed to the automation bridge. The presentation is always
    /// closed and the application always quit, even when the export throws.
    fn build_script(input: &Path, output: &Path) -> String {
        let input = Self::escape_single_quoted(input);
        let output = Self::escape_single_quoted(output);
        format!(
            "$ErrorActionPreference = 'Stop'\n\
             $app = New-Object -ComObject PowerPoint.Application\n\
             try {{\n\
                 $pres = $app.Presentations.Open('{input}', $true, $false, $false)\n\
                 try {{ $pres.SaveAs('{output}', {SAVE_AS_PDF}) }} finally {{ $pres.Close() }}\n\
             }} finally {{\n\
                 $app.Quit()\n\
             }}\n"
        )
    }
}

impl Default for PowerPointEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for PowerPointEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::PowerPoint
    }

    fn convert(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        if !input.is_file() {
            return Err(Error::InvalidInput {
                path: input.to_path_buf(),
                reason: "not a readable file".to_string(),
            });
        }

        let out_pdf = derive_output_path(input, output_dir);
        let script = Self::build_script(input, &out_pdf);

        debug!("Driving PowerPoint automation for {:?}", input);
        let output = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command"])
            .arg(&script)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ConversionFailed(format!(
                "PowerPoint automation failed for {:?}: {}",
                input,
                stderr.trim()
            )));
        }

        if !out_pdf.exists() {
            return Err(Error::OutputWrite(format!(
                "PowerPoint did not create {:?}",
                out_pdf
            )));
        }

        Ok(out_pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_exports_as_pdf_and_releases_the_document() {
        let script = PowerPointEngine::build_script(
            Path::new(r"C:\decks\talk.pptx"),
            Path::new(r"C:\out\talk.pdf"),
        );
        assert!(script.contains(r"Open('C:\decks\talk.pptx'"));
        assert!(script.contains(r"SaveAs('C:\out\talk.pdf', 32)"));
        assert!(script.contains("$pres.Close()"));
        assert!(script.contains("$app.Quit()"));
    }

    #[test]
    fn single_quotes_in_paths_are_doubled() {
        let script = PowerPointEngine::build_script(
            Path::new("/decks/bob's talk.pptx"),
            Path::new("/out/bob's talk.pdf"),
        );
        assert!(script.contains("bob''s talk.pptx"));
        assert!(script.contains("bob''s talk.pdf"));
    }
}
