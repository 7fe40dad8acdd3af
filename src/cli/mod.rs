//! Command Line Interface (CLI) layer for DECKPRESS.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for engine detection and batch
//! conversion flows. It wires user-provided options to the underlying
//! library functionality exposed via `deckpress::api`.
//!
//! If you are embedding DECKPRESS into another application, prefer using
//! the high-level `deckpress::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
