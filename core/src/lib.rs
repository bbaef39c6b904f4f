//! Command-tree resolution, dispatch, and contextual help.
//!
//! This crate resolves a process argument vector against a tree of
//! user-defined commands, composes the applicable flag definitions
//! along the resolved path, and either runs the matched command's
//! action or renders usage text:
//!
//! - [`Command`] — a tree node built from optional capabilities:
//!   descriptions, flag contributors, children, a runnable action.
//! - [`Program`] — the entry point pairing a root command with an
//!   optional global-flag contributor and an output sink.
//! - [`Error`] — the outcome taxonomy: structural misuse, unknown
//!   command, missing implementation, flag-parse failure, action
//!   errors.
//! - [`exit_code`] / [`ExitError`] — mapping an outcome to a process
//!   exit status.
//! - [`CancelToken`] — cooperative cancellation threaded through to
//!   actions, never inspected by the engine.
//!
//! The flag-parsing primitive lives in the `cmdtree-flags` crate and
//! is re-exported here for convenience.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use std::process;
//!
//! use cmdtree_core::{CancelToken, Command, Program, exit_code};
//!
//! let hello = Command::new("hello")
//!     .with_short("say hello!")
//!     .with_flags(|flags| flags.string("name", "World", "your name"))
//!     .with_action(|ctx| {
//!         let name = ctx.flags().get_str("name").unwrap_or_default().to_string();
//!         writeln!(ctx.out(), "Hello, {name}!")?;
//!         Ok(())
//!     });
//! let root = Command::new("app")
//!     .with_long("Example application.")
//!     .with_subcommand(hello);
//!
//! let mut program = Program::new(root);
//! let outcome = program.run(&CancelToken::new(), std::env::args().skip(1));
//! if let Err(err) = &outcome {
//!     eprintln!("{err}");
//! }
//! process::exit(exit_code(&outcome));
//! ```

mod cancel;
mod command;
mod error;
mod exit;
mod help;
mod program;
mod resolve;
mod validate;

pub use cancel::CancelToken;
pub use command::{Action, Command, Context, FlagHook};
pub use error::{BoxError, Error, Result};
pub use exit::{ExitError, exit_code};
pub use program::Program;

pub use cmdtree_flags::{Flag, FlagError, FlagSet, FlagValue};
