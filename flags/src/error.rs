//! Parse failures reported by the flag registry.
//!
//! The message text of every variant is part of the crate's contract:
//! callers surface these diagnostics to end users verbatim.

use thiserror::Error;

/// Errors produced while parsing a token list against a [`FlagSet`].
///
/// [`FlagSet`]: crate::FlagSet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// A flag was supplied that no contributor declared.
    #[error("flag provided but not defined: -{0}")]
    Undefined(String),

    /// A token that looks like a flag but cannot be one (e.g. `---x`).
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    /// A non-boolean flag appeared last with no value following it.
    #[error("flag needs an argument: -{0}")]
    MissingArgument(String),

    /// The value did not parse as the flag's declared type.
    #[error("invalid value {value:?} for flag -{name}: {reason}")]
    InvalidValue {
        /// Flag name without dashes.
        name: String,
        /// The offending raw value.
        value: String,
        /// Short parse-failure reason.
        reason: String,
    },

    /// `-h`, `-help`, or `--help` was supplied and no flag of that
    /// name is declared. Not a failure: the caller is expected to
    /// switch to help rendering.
    #[error("help requested")]
    HelpRequested,
}

/// Convenience alias for results with [`FlagError`].
pub type Result<T> = std::result::Result<T, FlagError>;
