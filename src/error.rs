use thiserror::Error;

/// Rejections surfaced by validating options.
///
/// The plain construction path cannot fail; only [`CheckedOption`]s
/// produce these, and construction stops at the first one.
///
/// [`CheckedOption`]: crate::validate::CheckedOption
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bind address is empty")]
    EmptyAddr,

    #[error("timeout must be non-zero")]
    ZeroTimeout,

    #[error("connection cap must be non-zero")]
    ZeroMaxConns,

    #[error("option rejected: {0}")]
    Rejected(String),
}
