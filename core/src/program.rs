//! The program entry point: validation, flag composition, dispatch.
//!
//! [`Program::run`] walks the argument vector against the command
//! tree, composes one flag registry for the invocation (global hook,
//! then persistent hooks of every ancestor on the trail, then the
//! terminal node's local hook — later contributors override earlier
//! names), and decides between running the matched action and
//! rendering help. Each call validates the tree and builds a fresh
//! registry, so repeated invocations are independent.

use std::io::{self, Write};

use tracing::debug;

use cmdtree_flags::{FlagError, FlagSet};

use crate::cancel::CancelToken;
use crate::command::{Command, Context, FlagHook};
use crate::error::Error;
use crate::{help, resolve, validate};

/// An invocation context: a root command, an optional global-flag
/// contributor, and an output sink.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use cmdtree_core::{CancelToken, Command, Program, exit_code};
///
/// let seen = Arc::new(Mutex::new(String::new()));
/// let sink = Arc::clone(&seen);
/// let root = Command::new("app")
///     .with_flags(|flags| flags.string("name", "World", "your name"))
///     .with_action(move |ctx| {
///         let name = ctx.flags().get_str("name").unwrap_or_default();
///         *sink.lock().unwrap() = name.to_string();
///         Ok(())
///     });
///
/// let mut program = Program::new(root).with_output(Vec::<u8>::new());
/// let outcome = program.run(&CancelToken::new(), ["-name", "Gopher"]);
/// assert_eq!(exit_code(&outcome), 0);
/// assert_eq!(*seen.lock().unwrap(), "Gopher");
/// ```
pub struct Program {
    root: Command,
    global_flags: Option<FlagHook>,
    output: Box<dyn Write>,
}

impl Program {
    /// Creates a program rooted at `root`, writing to stdout.
    pub fn new(root: Command) -> Self {
        Self {
            root,
            global_flags: None,
            output: Box::new(io::stdout()),
        }
    }

    /// Sets a contributor of flags available to every command, applied
    /// before any per-command contributor.
    pub fn with_global_flags(mut self, hook: impl Fn(&mut FlagSet) + 'static) -> Self {
        self.global_flags = Some(Box::new(hook));
        self
    }

    /// Replaces the output sink. Mostly useful for capturing rendered
    /// help in tests.
    pub fn with_output(mut self, output: impl Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Resolves `args` and either runs the matched command's action or
    /// renders contextual help.
    ///
    /// `args` are the process arguments after the binary name. The
    /// cancellation token is passed through to the action untouched.
    /// The tree is validated on every call; structural mistakes
    /// (duplicate or empty sibling names) are reported before any
    /// argument is processed.
    pub fn run<I, S>(&mut self, cancel: &CancelToken, args: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        debug!(?args, root = self.root.name(), "run");
        validate::validate_tree(&self.root)?;

        let mut flags = FlagSet::new();
        if let Some(hook) = &self.global_flags {
            hook(&mut flags);
        }

        let root = &self.root;
        let out = self.output.as_mut();

        // A leading literal `help` selects help-mode; it is not a path
        // segment.
        let stripped = resolve::strip_help(&args);
        let res = resolve::resolve(root, resolve::path_tokens(stripped));
        debug!(
            terminal = res.terminal().name(),
            consumed = res.consumed(),
            "resolved path"
        );

        for ancestor in &res.trail[..res.trail.len() - 1] {
            ancestor.apply_persistent_flags(&mut flags);
        }
        res.terminal().apply_flags(&mut flags);

        let help_mode = args.first().map(String::as_str) == Some("help");
        if (args.is_empty() && !root.is_runnable()) || help_mode {
            return help::run(root, stripped, &flags, out);
        }
        if !res.terminal().is_runnable() {
            debug!(terminal = res.terminal().name(), "not runnable, showing help");
            return help::run(root, stripped, &flags, out);
        }

        match flags.parse(&stripped[res.consumed()..]) {
            Err(FlagError::HelpRequested) => help::run(root, stripped, &flags, out),
            Err(err) => Err(err.into()),
            Ok(()) => {
                debug!(terminal = res.terminal().name(), "running action");
                let mut ctx = Context::new(cancel.clone(), &flags, flags.args(), out);
                res.terminal().run_action(&mut ctx)
            }
        }
    }
}
