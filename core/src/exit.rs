//! Outcome-to-exit-code classification.

use std::error::Error as StdError;

use thiserror::Error;

use crate::error::{BoxError, Error};

/// An error carrying an explicit process exit code.
///
/// Actions return this (directly or wrapped deeper in an error chain)
/// when the process should exit with a specific status. `Display`
/// shows the wrapped error's message; the code travels alongside.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{Error, ExitError, exit_code};
///
/// let outcome: Result<(), Error> =
///     Err(ExitError::new(2, "cannot find system").into());
/// assert_eq!(exit_code(&outcome), 2);
/// assert_eq!(outcome.unwrap_err().to_string(), "cannot find system");
/// ```
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ExitError {
    code: i32,
    source: BoxError,
}

impl ExitError {
    /// Wraps `source`, attaching `code` as the process exit status.
    pub fn new(code: i32, source: impl Into<BoxError>) -> Self {
        Self {
            code,
            source: source.into(),
        }
    }

    /// The exit code to use when this error terminates the process.
    pub fn code(&self) -> i32 {
        self.code
    }
}

/// Maps an invocation outcome to a process exit code.
///
/// `Ok` maps to 0. An [`ExitError`] anywhere in the outcome (as the
/// [`Error::Exit`] variant, or buried in an action error's source
/// chain) contributes its carried code. [`Error::ChildExit`] reuses
/// the child process's own status, falling back to 1 when the child
/// was killed by a signal. Every other error maps to 1.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{Error, exit_code};
///
/// assert_eq!(exit_code(&Ok(())), 0);
/// assert_eq!(exit_code::<()>(&Err(Error::other("boom"))), 1);
/// ```
pub fn exit_code<T>(outcome: &Result<T, Error>) -> i32 {
    let err = match outcome {
        Ok(_) => return 0,
        Err(err) => err,
    };
    match err {
        Error::Exit(exit) => exit.code(),
        Error::ChildExit(status) => status.code().unwrap_or(1),
        Error::Action(boxed) => {
            let mut current: Option<&(dyn StdError + 'static)> = Some(&**boxed);
            while let Some(err) = current {
                if let Some(exit) = err.downcast_ref::<ExitError>() {
                    return exit.code();
                }
                current = err.source();
            }
            1
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("wrapped: {source}")]
    struct WrapError {
        source: ExitError,
    }

    #[test]
    fn test_ok_is_zero() {
        assert_eq!(exit_code(&Ok(())), 0);
    }

    #[test]
    fn test_exit_error_code_is_used() {
        let outcome: Result<(), Error> =
            Err(ExitError::new(2, "cannot find system").into());
        assert_eq!(exit_code(&outcome), 2);
    }

    #[test]
    fn test_generic_error_is_one() {
        let outcome: Result<(), Error> = Err(Error::other("cannot find error code"));
        assert_eq!(exit_code(&outcome), 1);
        let outcome: Result<(), Error> =
            Err(Error::UnknownCommand("app notfound".into()));
        assert_eq!(exit_code(&outcome), 1);
    }

    #[test]
    fn test_exit_error_found_through_source_chain() {
        let wrapped = WrapError {
            source: ExitError::new(3, "inner failure"),
        };
        let outcome: Result<(), Error> = Err(Error::other(wrapped));
        assert_eq!(exit_code(&outcome), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_child_exit_status_is_copied() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        let status = ExitStatus::from_raw(2 << 8);
        let outcome: Result<(), Error> = Err(Error::ChildExit(status));
        assert_eq!(exit_code(&outcome), 2);

        // Killed by SIGKILL: no exit code, classifier falls back to 1.
        let killed = ExitStatus::from_raw(9);
        let outcome: Result<(), Error> = Err(Error::ChildExit(killed));
        assert_eq!(exit_code(&outcome), 1);
    }

    #[test]
    fn test_exit_error_displays_wrapped_message() {
        let err = ExitError::new(3, "this is the original error");
        assert_eq!(err.to_string(), "this is the original error");
        assert_eq!(err.code(), 3);
    }
}
