use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating profiles, loading rosters, or spending currency.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The player cannot pay for a decision.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// Cost of the attempted decision.
        needed: u32,
        /// Currency the player holds.
        available: u32,
    },

    /// A roster file could not be read.
    #[error("cannot read roster {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A roster file is not valid JSON for the roster schema.
    #[error("invalid roster: {0}")]
    Parse(#[from] serde_json::Error),

    /// A profile failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}
