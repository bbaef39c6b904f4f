//! Structural integrity checks for the command tree.
//!
//! Duplicate or empty sibling names are programming mistakes in how
//! the tree was assembled, not runtime conditions. The walk runs at
//! the start of every invocation, before any argument is looked at,
//! and fails fast naming the full path to the offending node.

use std::collections::HashSet;

use crate::command::Command;
use crate::error::Error;

/// Validates the whole tree below (and including) the root.
pub(crate) fn validate_tree(root: &Command) -> Result<(), Error> {
    if root.name().is_empty() {
        return Err(Error::EmptyCommandName("<root>".to_string()));
    }
    let mut path = vec![root.name().to_string()];
    validate_children(root, &mut path)
}

fn validate_children(cmd: &Command, path: &mut Vec<String>) -> Result<(), Error> {
    let mut seen: HashSet<&str> = HashSet::new();
    for child in cmd.subcommands() {
        if child.name().is_empty() {
            return Err(Error::EmptyCommandName(path.join(" ")));
        }
        if !seen.insert(child.name()) {
            let full = path
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(child.name()))
                .collect::<Vec<_>>()
                .join(" ");
            return Err(Error::DuplicateCommand(full));
        }
        path.push(child.name().to_string());
        validate_children(child, path)?;
        path.pop();
    }
    Ok(())
}
