//! The capability model: commands as records with optional slots.
//!
//! A [`Command`] needs nothing but a name. Every other capability —
//! descriptions, flag contribution, children, a runnable action — is
//! an optional slot filled through the builder methods; the engine
//! probes for presence and adapts. A command with children is an
//! interior node; one with an action is executable; one with neither
//! is a help-only topic.

use std::fmt;
use std::io::Write;

use cmdtree_flags::FlagSet;

use crate::cancel::CancelToken;
use crate::error::Error;

/// A flag-contribution hook: declares flags onto the invocation's
/// registry.
pub type FlagHook = Box<dyn Fn(&mut FlagSet)>;

/// A runnable action.
pub type Action = Box<dyn Fn(&mut Context<'_>) -> Result<(), Error>>;

/// The action's view of one invocation.
///
/// Carries the cancellation token (a pass-through contract between
/// the caller and the action — the engine never looks at it), the
/// composed flag registry after parsing, the residual non-flag
/// arguments, and the invocation's output sink.
pub struct Context<'a> {
    cancel: CancelToken,
    flags: &'a FlagSet,
    args: &'a [String],
    out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        cancel: CancelToken,
        flags: &'a FlagSet,
        args: &'a [String],
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            cancel,
            flags,
            args,
            out,
        }
    }

    /// The caller's cancellation token.
    pub fn cancel(&self) -> &CancelToken {
        &self.cancel
    }

    /// The composed flag registry, already parsed.
    pub fn flags(&self) -> &FlagSet {
        self.flags
    }

    /// Arguments left over after path resolution and flag parsing.
    pub fn args(&self) -> &[String] {
        self.args
    }

    /// The invocation's output sink.
    pub fn out(&mut self) -> &mut dyn Write {
        self.out
    }
}

/// A node in the command tree.
///
/// Built with [`Command::new`] plus `with_*` builder methods; only the
/// name is required. Sibling names must be unique and non-empty — the
/// tree validator checks this at the start of every run.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use cmdtree_core::Command;
///
/// let hello = Command::new("hello")
///     .with_short("say hello!")
///     .with_flags(|flags| flags.string("name", "World", "your name"))
///     .with_action(|ctx| {
///         let name = ctx.flags().get_str("name").unwrap_or_default().to_string();
///         writeln!(ctx.out(), "Hello, {name}!")?;
///         Ok(())
///     });
///
/// let app = Command::new("app")
///     .with_long("Example application.")
///     .with_subcommand(hello);
///
/// assert!(!app.is_runnable());
/// assert!(app.has_subcommands());
/// assert_eq!(app.subcommands()[0].name(), "hello");
/// ```
pub struct Command {
    name: String,
    short: Option<String>,
    long: Option<String>,
    footer: Option<String>,
    children: Vec<Command>,
    flags: Option<FlagHook>,
    persistent_flags: Option<FlagHook>,
    action: Option<Action>,
}

impl Command {
    /// Creates a command with the given name and no other capability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
            footer: None,
            children: Vec::new(),
            flags: None,
            persistent_flags: None,
            action: None,
        }
    }

    /// Sets the one-line description shown in a parent's command list.
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Sets the long description shown at the top of this command's
    /// help output.
    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Sets the footer shown at the bottom of this command's help
    /// output, typically examples.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Appends a child command.
    pub fn with_subcommand(mut self, child: Command) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the local flag contributor, applied when this command is
    /// the terminal node of the resolved path.
    pub fn with_flags(mut self, hook: impl Fn(&mut FlagSet) + 'static) -> Self {
        self.flags = Some(Box::new(hook));
        self
    }

    /// Sets the persistent flag contributor, applied whenever this
    /// command is an ancestor of the resolved terminal node.
    pub fn with_persistent_flags(mut self, hook: impl Fn(&mut FlagSet) + 'static) -> Self {
        self.persistent_flags = Some(Box::new(hook));
        self
    }

    /// Sets the runnable action.
    pub fn with_action(
        mut self,
        action: impl Fn(&mut Context<'_>) -> Result<(), Error> + 'static,
    ) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description, if set.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Long description, if set.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Footer text, if set.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Child commands in declaration order.
    pub fn subcommands(&self) -> &[Command] {
        &self.children
    }

    /// Whether a runnable action is present.
    pub fn is_runnable(&self) -> bool {
        self.action.is_some()
    }

    /// Whether any child commands are declared.
    pub fn has_subcommands(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn find_child(&self, name: &str) -> Option<&Command> {
        self.children.iter().find(|child| child.name == name)
    }

    pub(crate) fn apply_flags(&self, flags: &mut FlagSet) {
        if let Some(hook) = &self.flags {
            hook(flags);
        }
    }

    pub(crate) fn apply_persistent_flags(&self, flags: &mut FlagSet) {
        if let Some(hook) = &self.persistent_flags {
            hook(flags);
        }
    }

    /// Invokes the action. The dispatcher only calls this on nodes
    /// where [`is_runnable`](Command::is_runnable) holds.
    pub(crate) fn run_action(&self, ctx: &mut Context<'_>) -> Result<(), Error> {
        match &self.action {
            Some(action) => action(ctx),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("children", &self.children.len())
            .field("runnable", &self.action.is_some())
            .field("has_flags", &self.flags.is_some())
            .field("has_persistent_flags", &self.persistent_flags.is_some())
            .finish_non_exhaustive()
    }
}
