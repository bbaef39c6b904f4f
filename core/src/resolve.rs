//! Path resolution: walking the argument vector against the tree.

use crate::command::Command;

/// The result of resolving an argument vector against a tree: the
/// command path from the root to the deepest matched node.
///
/// The trail is never empty — the root is always its first element —
/// and every element is a declared child of its predecessor.
pub(crate) struct Resolution<'a> {
    pub(crate) trail: Vec<&'a Command>,
}

impl<'a> Resolution<'a> {
    /// The deepest matched node.
    pub(crate) fn terminal(&self) -> &'a Command {
        self.trail[self.trail.len() - 1]
    }

    /// How many leading tokens were consumed as path components.
    pub(crate) fn consumed(&self) -> usize {
        self.trail.len() - 1
    }

    /// Trail names excluding the root.
    pub(crate) fn breadcrumb(&self) -> Vec<&'a str> {
        self.trail[1..].iter().map(|cmd| cmd.name()).collect()
    }
}

/// The leading contiguous run of tokens that can be path components:
/// the scan stops at the first token starting with `-` (which covers
/// `--` and a lone `-` as well).
pub(crate) fn path_tokens(args: &[String]) -> &[String] {
    let end = args
        .iter()
        .position(|arg| arg.starts_with('-'))
        .unwrap_or(args.len());
    &args[..end]
}

/// Strips the help-mode selector: a literal `help` as the very first
/// token is not a path segment.
pub(crate) fn strip_help(args: &[String]) -> &[String] {
    match args.first() {
        Some(first) if first == "help" => &args[1..],
        _ => args,
    }
}

/// Walks `tokens` from the root, descending through exact child-name
/// matches. The walk stops at the first token that matches no child;
/// that token and everything after it are not path components.
pub(crate) fn resolve<'a>(root: &'a Command, tokens: &[String]) -> Resolution<'a> {
    let mut trail = vec![root];
    let mut current = root;
    for token in tokens {
        match current.find_child(token) {
            Some(child) => {
                trail.push(child);
                current = child;
            }
            None => break,
        }
    }
    Resolution { trail }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn tree() -> Command {
        Command::new("app").with_subcommand(
            Command::new("remote")
                .with_subcommand(Command::new("add"))
                .with_subcommand(Command::new("remove")),
        )
    }

    #[test]
    fn test_empty_arguments_resolve_to_root() {
        let root = tree();
        let res = resolve(&root, &[]);
        assert_eq!(res.consumed(), 0);
        assert_eq!(res.terminal().name(), "app");
        assert!(res.breadcrumb().is_empty());
    }

    #[test]
    fn test_full_path_consumes_every_segment() {
        let root = tree();
        let args = argv(&["remote", "add"]);
        let res = resolve(&root, path_tokens(&args));
        assert_eq!(res.trail.len(), 3);
        assert_eq!(res.consumed(), 2);
        assert_eq!(res.breadcrumb(), ["remote", "add"]);
    }

    #[test]
    fn test_unmatched_segment_stops_the_walk() {
        let root = tree();
        let args = argv(&["remote", "rename", "origin"]);
        let res = resolve(&root, path_tokens(&args));
        assert_eq!(res.consumed(), 1);
        assert_eq!(res.terminal().name(), "remote");
    }

    #[test]
    fn test_path_tokens_stop_at_flag_prefix() {
        assert_eq!(
            path_tokens(&argv(&["remote", "-v", "add"])),
            argv(&["remote"])
        );
        assert_eq!(path_tokens(&argv(&["--", "remote"])), argv(&[]));
        assert_eq!(path_tokens(&argv(&["-"])), argv(&[]));
        assert_eq!(
            path_tokens(&argv(&["a", "b"])),
            argv(&["a", "b"])
        );
    }

    #[test]
    fn test_strip_help_only_removes_leading_token() {
        let args = argv(&["help", "remote"]);
        assert_eq!(strip_help(&args), argv(&["remote"]));

        let args = argv(&["remote", "help"]);
        assert_eq!(strip_help(&args), argv(&["remote", "help"]));

        let args = argv(&[]);
        assert!(strip_help(&args).is_empty());
    }
}
