//! Error taxonomy for tree validation, resolution, and dispatch.
//!
//! Every failure a [`Program::run`](crate::Program::run) call can
//! produce is a variant here. Structural problems (duplicate or empty
//! command names) indicate a bug in how the tree was assembled and are
//! reported before any argument is looked at; the remaining variants
//! are ordinary runtime outcomes. Pair the result with
//! [`exit_code`](crate::exit_code) to obtain a process exit status.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

use cmdtree_flags::FlagError;

use crate::exit::ExitError;

/// Boxed error type accepted from actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors reported by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Two sibling commands share a name. The payload is the full
    /// path from the root to the duplicate.
    #[error("command implemented multiple times: '{0}'")]
    DuplicateCommand(String),

    /// A command in the tree has an empty name. The payload is the
    /// path of its parent.
    #[error("command with empty name under '{0}'")]
    EmptyCommandName(String),

    /// A path segment beyond what the tree defines was supplied. The
    /// payload is the binary name plus every segment up to and
    /// including the first unmatched one.
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    /// The resolved command exposes no runnable action, no children,
    /// no long description, and no footer, so neither running nor
    /// help rendering can do anything useful.
    #[error("command or topic '{0}' is missing implementation")]
    MissingImplementation(String),

    /// The composed flag registry rejected a token. The diagnostic is
    /// delegated verbatim from the registry.
    #[error(transparent)]
    Flag(#[from] FlagError),

    /// An action failed with an explicit exit code.
    #[error(transparent)]
    Exit(#[from] ExitError),

    /// An action's child process exited abnormally.
    #[error("child process exited with {0}")]
    ChildExit(ExitStatus),

    /// Writing to the output sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Any other error returned by an action, propagated unmodified.
    #[error(transparent)]
    Action(BoxError),
}

impl Error {
    /// Wraps an arbitrary action error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdtree_core::Error;
    ///
    /// let err = Error::other("cannot find system");
    /// assert_eq!(err.to_string(), "cannot find system");
    /// ```
    pub fn other(err: impl Into<BoxError>) -> Self {
        Error::Action(err.into())
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
