//! Contextual help rendering.
//!
//! Help output is assembled from blocks separated by blank lines:
//! long description, usage line, commands section, flags section,
//! follow-up hint, footer. The commands and flags sections share one
//! label column, padded to the widest label plus an eight-cell gutter
//! (display cells, not bytes). A node that renders no block at all is
//! "missing implementation" and reported as such.

use std::io::{self, Write};

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use cmdtree_flags::{Flag, FlagSet, FlagValue};

use crate::command::Command;
use crate::error::Error;
use crate::resolve;

const GUTTER: usize = 8;
const INDENT: &str = "        ";

/// Resolves `args` (already stripped of a leading `help` token)
/// against the tree and renders help for the deepest matched node.
///
/// Rendering happens even when the call ultimately fails: a node with
/// no usable capability yields [`Error::MissingImplementation`] after
/// writing nothing, and unmatched trailing path segments yield
/// [`Error::UnknownCommand`] after the matched node's help has been
/// written.
pub(crate) fn run(
    root: &Command,
    args: &[String],
    flags: &FlagSet,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let res = resolve::resolve(root, resolve::path_tokens(args));
    let node = res.terminal();
    debug!(node = node.name(), "rendering help");

    let page = HelpPage {
        binary: root.name(),
        breadcrumb: res.breadcrumb(),
        long: node.long(),
        footer: node.footer(),
        children: node.subcommands(),
        flags,
        runnable: node.is_runnable(),
    };
    page.render(out)?;

    if !page.usable() && page.long.is_none() && page.footer.is_none() {
        return Err(Error::MissingImplementation(page.breadcrumb.join(" ")));
    }

    // Path segments past the matched trail: for a non-runnable node
    // they cannot be arguments, so the first of them is an unknown
    // command.
    let non_flags = resolve::path_tokens(args);
    if !page.runnable && non_flags.len() > res.consumed() {
        let attempted: Vec<&str> = std::iter::once(root.name())
            .chain(non_flags[..res.consumed() + 1].iter().map(String::as_str))
            .collect();
        return Err(Error::UnknownCommand(attempted.join(" ")));
    }
    Ok(())
}

struct HelpPage<'a> {
    binary: &'a str,
    breadcrumb: Vec<&'a str>,
    long: Option<&'a str>,
    footer: Option<&'a str>,
    children: &'a [Command],
    flags: &'a FlagSet,
    runnable: bool,
}

impl HelpPage<'_> {
    /// Usage and flags only make sense for nodes that can run or
    /// delegate; pure topics get neither.
    fn usable(&self) -> bool {
        self.runnable || !self.children.is_empty()
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let command_rows: Vec<(String, String)> = if self.children.is_empty() {
            Vec::new()
        } else {
            self.children
                .iter()
                .map(|child| {
                    (
                        child.name().to_string(),
                        child.short().unwrap_or_default().to_string(),
                    )
                })
                .collect()
        };
        let flag_rows: Vec<(String, String)> = if self.usable() {
            let mut rows: Vec<(String, String)> = self
                .flags
                .iter()
                .map(|flag| (flag_label(flag), flag_description(flag)))
                .collect();
            rows.push(("-help".to_string(), "show help message".to_string()));
            rows
        } else {
            Vec::new()
        };
        let width = command_rows
            .iter()
            .chain(flag_rows.iter())
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        let mut blocks: Vec<String> = Vec::new();
        if let Some(long) = self.long {
            blocks.push(long.trim_end().to_string());
        }
        if self.usable() {
            blocks.push(self.usage_line());
        }
        if !command_rows.is_empty() {
            blocks.push(section("Commands", &command_rows, width));
        }
        if !flag_rows.is_empty() {
            blocks.push(section("Flags", &flag_rows, width));
        }
        if !self.children.is_empty() {
            blocks.push(self.hint_line());
        }
        if let Some(footer) = self.footer {
            blocks.push(footer.trim_end().to_string());
        }

        if blocks.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", blocks.join("\n\n"))
    }

    fn usage_line(&self) -> String {
        let mut parts = vec![self.binary];
        parts.extend(self.breadcrumb.iter().copied());
        if !self.children.is_empty() {
            parts.push("<command>");
        }
        parts.push("[flags] [arguments]");
        format!("Usage:  {}", parts.join(" "))
    }

    fn hint_line(&self) -> String {
        let mut parts = vec![self.binary, "help"];
        parts.extend(self.breadcrumb.iter().copied());
        parts.push("<command>");
        format!(
            "Use \"{}\" for more information about that command.",
            parts.join(" ")
        )
    }
}

fn section(title: &str, rows: &[(String, String)], width: usize) -> String {
    let mut lines = vec![format!("{title}:")];
    for (label, description) in rows {
        if description.is_empty() {
            lines.push(format!("{INDENT}{label}"));
        } else {
            let pad = " ".repeat(width + GUTTER - label.width());
            lines.push(format!("{INDENT}{label}{pad}{description}"));
        }
    }
    lines.join("\n")
}

fn flag_label(flag: &Flag) -> String {
    match flag.default().type_tag() {
        None => format!("-{}", flag.name()),
        Some(tag) => format!("-{} ({})", flag.name(), tag),
    }
}

fn flag_description(flag: &Flag) -> String {
    let mut text = flag.usage().to_string();
    if !flag.default().is_zero() {
        match flag.default() {
            FlagValue::Str(s) => text.push_str(&format!(" (default {s:?})")),
            other => text.push_str(&format!(" (default {other})")),
        }
    }
    text
}
