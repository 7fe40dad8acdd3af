#![doc = r#"
DECKPRESS — a desktop presentation-to-PDF batch converter.

This crate turns PowerPoint presentations (`.ppt`, `.pptx`) into PDFs by
delegating to conversion engines already installed on the host: the
LibreOffice headless command line, or PowerPoint's own automation interface
on Windows. It powers both the DECKPRESS CLI and GUI, and can be embedded in
your own Rust applications.

Requirements
------------
- At least one engine on the host: a LibreOffice installation (any
  platform), or PowerPoint on Windows.

Quick start: convert a single file
----------------------------------
```rust,no_run
use std::path::Path;
use deckpress::{EngineChoice, convert_file};

fn main() -> deckpress::Result<()> {
    let pdf = convert_file(
        Path::new("/decks/quarterly.pptx"),
        Path::new("/out"),
        EngineChoice::Auto,
    )?;
    println!("wrote {:?}", pdf);
    Ok(())
}
```

Batch a folder tree
-------------------
```rust,no_run
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use deckpress::{EngineChoice, run_batch};

fn main() -> deckpress::Result<()> {
    let cancel = AtomicBool::new(false);
    let report = run_batch(
        &[PathBuf::from("/decks")],
        true, // recursive
        Path::new("/out"),
        EngineChoice::Auto,
        &cancel,
        |_event| {},
    )?;
    println!("converted={} failed={} cancelled={}",
        report.converted, report.failed, report.cancelled);
    Ok(())
}
```

Error handling
--------------
All public functions return `deckpress::Result<T>`; match on
`deckpress::Error` to handle specific cases, e.g. a missing engine.

```rust,no_run
use std::path::Path;
use deckpress::{Error, EngineChoice, convert_file};

fn main() {
    match convert_file(Path::new("/decks/a.pptx"), Path::new("/out"), EngineChoice::Auto) {
        Ok(pdf) => println!("{:?}", pdf),
        Err(Error::EngineNotFound(msg)) => eprintln!("no engine: {msg}"),
        Err(other) => eprintln!("conversion error: {other}"),
    }
}
```

Feature flags
-------------
- `gui`: builds the GUI crate module.
- `full`: enables a complete feature set for typical end-to-end workflows.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `EngineChoice`, `ConversionJob`).
- [`engines`] — engine detection and the concrete engine drivers.
- [`batch`] — queue expansion and the sequential runner.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod batch;
pub mod engines;
pub mod error;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::{
    ConversionJob, EngineChoice, EngineKind, JobStatus, SUPPORTED_EXTENSIONS, is_presentation_file,
};

// Engines
pub use engines::{Engine, EngineAvailability, LibreOfficeEngine, PowerPointEngine, detect};

// Batch primitives
pub use batch::{BatchEvent, BatchReport};

// High-level API re-exports
pub use api::{convert_file, preview_queue, run_batch};
