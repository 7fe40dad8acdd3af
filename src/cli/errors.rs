use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("No inputs given. Pass at least one file or folder with --input.")]
    NoInputs,

    #[error("Batch finished with {failed} failed conversion(s)")]
    BatchFailed { failed: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lib(#[from] deckpress::Error),
}
