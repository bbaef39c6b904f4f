//! Typed Unix-style flag registry.
//!
//! This crate provides the flag-parsing primitive used by
//! `cmdtree-core`:
//!
//! - [`FlagSet`] — a registry of typed flag declarations that parses a
//!   token list (`-name value`, `--name=value`, `--` terminator).
//! - [`FlagValue`] — the typed value of a declared flag, with zero-value
//!   detection and help-output type tags.
//! - [`FlagError`] — parse diagnostics whose message text is surfaced to
//!   end users verbatim.
//!
//! Declaring a name that already exists replaces the earlier definition,
//! so registries can be composed from several contributors where later
//! contributors override earlier defaults.
//!
//! # Example
//!
//! ```
//! use cmdtree_flags::{FlagSet, FlagError};
//!
//! let mut flags = FlagSet::new();
//! flags.string("name", "World", "your name");
//!
//! let argv: Vec<String> = vec!["-name".into(), "Gopher".into(), "rest".into()];
//! flags.parse(&argv).unwrap();
//! assert_eq!(flags.get_str("name"), Some("Gopher"));
//! assert_eq!(flags.args(), ["rest".to_string()]);
//!
//! // An undefined -h/-help/--help becomes a help request, not a failure.
//! let mut flags = FlagSet::new();
//! assert_eq!(flags.parse(&["--help".to_string()]), Err(FlagError::HelpRequested));
//! ```

mod error;
mod set;
mod value;

pub use error::{FlagError, Result};
pub use set::{Flag, FlagSet};
pub use value::FlagValue;
