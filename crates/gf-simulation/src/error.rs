use gf_core::creature::CreatureId;
use gf_core::error::CoreError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by a gameplay session. Per-frame updates never fail.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// No creature with this id is in the session.
    #[error("creature not found in session: {0}")]
    CreatureNotFound(CreatureId),

    /// No creature with this name is in the session.
    #[error("no creature named \"{0}\"")]
    UnknownName(String),

    /// A session parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A profile, roster, or purchase was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),
}
