//! The flag registry itself.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::FlagError;
use crate::value::FlagValue;

/// One declared flag: name, help text, default, and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    name: String,
    usage: String,
    default: FlagValue,
    value: FlagValue,
}

impl Flag {
    /// Flag name without dashes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text supplied at declaration.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Declaration default.
    pub fn default(&self) -> &FlagValue {
        &self.default
    }

    /// Current value: the default until [`FlagSet::parse`] overwrites it.
    pub fn value(&self) -> &FlagValue {
        &self.value
    }
}

/// A registry of typed flags with Unix single-dash parsing.
///
/// Flags are declared with [`boolean`](FlagSet::boolean),
/// [`int`](FlagSet::int), [`float`](FlagSet::float), and
/// [`string`](FlagSet::string). Declaring a name twice replaces the
/// earlier definition; contribution order decides who wins.
///
/// [`parse`](FlagSet::parse) accepts `-name`, `--name`, `-name=value`,
/// and `--name=value`, stops at the first non-flag token, and treats
/// `--` as an end-of-flags marker. The unparsed remainder is available
/// through [`args`](FlagSet::args).
///
/// # Examples
///
/// ```
/// use cmdtree_flags::FlagSet;
///
/// let mut flags = FlagSet::new();
/// flags.string("name", "World", "your name");
/// flags.boolean("verbose", false, "show more information");
///
/// let argv: Vec<String> = ["-verbose", "-name=Gopher", "input.txt"]
///     .iter().map(|s| s.to_string()).collect();
/// flags.parse(&argv).unwrap();
///
/// assert_eq!(flags.get_str("name"), Some("Gopher"));
/// assert_eq!(flags.get_bool("verbose"), Some(true));
/// assert_eq!(flags.args(), ["input.txt".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct FlagSet {
    flags: BTreeMap<String, Flag>,
    args: Vec<String>,
}

impl FlagSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a boolean flag.
    ///
    /// Boolean flags never consume the following token; an explicit
    /// value can only be given inline, as `-name=false`.
    pub fn boolean(&mut self, name: &str, default: bool, usage: &str) {
        self.define(name, FlagValue::Bool(default), usage);
    }

    /// Declares an integer flag.
    pub fn int(&mut self, name: &str, default: i64, usage: &str) {
        self.define(name, FlagValue::Int(default), usage);
    }

    /// Declares a float flag.
    pub fn float(&mut self, name: &str, default: f64, usage: &str) {
        self.define(name, FlagValue::Float(default), usage);
    }

    /// Declares a string flag.
    pub fn string(&mut self, name: &str, default: &str, usage: &str) {
        self.define(name, FlagValue::Str(default.to_string()), usage);
    }

    fn define(&mut self, name: &str, default: FlagValue, usage: &str) {
        let flag = Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            value: default.clone(),
            default,
        };
        // Redeclaration replaces the earlier definition: later
        // contributors override earlier ones.
        self.flags.insert(name.to_string(), flag);
    }

    /// Looks up a declared flag by name.
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// Current value of a flag, if declared.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name).map(Flag::value)
    }

    /// Current value of a boolean flag.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FlagValue::as_bool)
    }

    /// Current value of an integer flag.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FlagValue::as_int)
    }

    /// Current value of a float flag.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FlagValue::as_float)
    }

    /// Current value of a string flag.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FlagValue::as_str)
    }

    /// Declared flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Number of declared flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are declared.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Tokens left over after parsing stopped.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Parses `argv` against the declared flags.
    ///
    /// Scanning stops at the first token that is not a flag (a lone
    /// `-` counts as a non-flag) or after an end-of-flags `--` marker;
    /// the remainder is kept for [`args`](FlagSet::args). Parsed
    /// values overwrite the current values in place. Declarations and
    /// defaults are untouched, so a registry can be inspected for help
    /// rendering after a failed parse.
    ///
    /// An undefined `-h`, `-help`, or `--help` yields
    /// [`FlagError::HelpRequested`]; a declared flag named `help`
    /// takes precedence over the built-in behavior.
    pub fn parse(&mut self, argv: &[String]) -> Result<(), FlagError> {
        self.args.clear();
        let mut i = 0;
        while i < argv.len() {
            let token = argv[i].as_str();
            if token == "-" || !token.starts_with('-') {
                break;
            }
            let mut name = &token[1..];
            if let Some(rest) = name.strip_prefix('-') {
                if rest.is_empty() {
                    // End-of-flags marker, consumed.
                    i += 1;
                    break;
                }
                name = rest;
            }
            if name.is_empty() || name.starts_with('-') || name.starts_with('=') {
                return Err(FlagError::BadSyntax(token.to_string()));
            }

            let (name, inline) = match name.split_once('=') {
                Some((n, v)) => (n, Some(v)),
                None => (name, None),
            };

            let Some(flag) = self.flags.get_mut(name) else {
                if name == "help" || name == "h" {
                    return Err(FlagError::HelpRequested);
                }
                return Err(FlagError::Undefined(name.to_string()));
            };

            let raw = match (&flag.value, inline) {
                (_, Some(v)) => v.to_string(),
                (FlagValue::Bool(_), None) => {
                    flag.value = FlagValue::Bool(true);
                    i += 1;
                    continue;
                }
                (_, None) => {
                    i += 1;
                    if i >= argv.len() {
                        return Err(FlagError::MissingArgument(name.to_string()));
                    }
                    argv[i].clone()
                }
            };
            flag.value = flag.value.parse_token(&raw).map_err(|reason| {
                FlagError::InvalidValue {
                    name: name.to_string(),
                    value: raw.clone(),
                    reason,
                }
            })?;
            i += 1;
        }
        self.args = argv[i..].to_vec();
        debug!(parsed = i, residual = self.args.len(), "parsed flags");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_typed_values() {
        let mut flags = FlagSet::new();
        flags.string("planet", "Earth", "name of the planet");
        flags.int("nodes", 1, "number of nodes");
        flags.float("ratio", 0.5, "split ratio");
        flags.boolean("open", true, "open link in the browser");

        flags
            .parse(&argv(&["-planet", "Mars", "--nodes=3", "-ratio", "0.25"]))
            .unwrap();

        assert_eq!(flags.get_str("planet"), Some("Mars"));
        assert_eq!(flags.get_int("nodes"), Some(3));
        assert_eq!(flags.get_float("ratio"), Some(0.25));
        assert_eq!(flags.get_bool("open"), Some(true));
        assert!(flags.args().is_empty());
    }

    #[test]
    fn test_parse_stops_at_first_non_flag() {
        let mut flags = FlagSet::new();
        flags.boolean("verbose", false, "verbose mode");

        flags
            .parse(&argv(&["-verbose", "input", "-other", "x"]))
            .unwrap();

        assert_eq!(flags.get_bool("verbose"), Some(true));
        assert_eq!(flags.args(), argv(&["input", "-other", "x"]));
    }

    #[test]
    fn test_double_dash_terminates_flags() {
        let mut flags = FlagSet::new();
        flags.string("name", "World", "your name");

        flags.parse(&argv(&["--", "-name", "Gopher"])).unwrap();

        assert_eq!(flags.get_str("name"), Some("World"));
        assert_eq!(flags.args(), argv(&["-name", "Gopher"]));
    }

    #[test]
    fn test_lone_dash_is_an_argument() {
        let mut flags = FlagSet::new();
        flags.parse(&argv(&["-", "tail"])).unwrap();
        assert_eq!(flags.args(), argv(&["-", "tail"]));
    }

    #[test]
    fn test_boolean_does_not_consume_next_token() {
        let mut flags = FlagSet::new();
        flags.boolean("verbose", false, "verbose mode");

        flags.parse(&argv(&["-verbose", "false"])).unwrap();

        assert_eq!(flags.get_bool("verbose"), Some(true));
        assert_eq!(flags.args(), argv(&["false"]));
    }

    #[test]
    fn test_boolean_inline_value() {
        let mut flags = FlagSet::new();
        flags.boolean("open", true, "open link in the browser");

        flags.parse(&argv(&["-open=false"])).unwrap();
        assert_eq!(flags.get_bool("open"), Some(false));
    }

    #[test]
    fn test_undefined_flag() {
        let mut flags = FlagSet::new();
        let err = flags.parse(&argv(&["-undefined"])).unwrap_err();
        assert_eq!(err, FlagError::Undefined("undefined".to_string()));
        assert_eq!(
            err.to_string(),
            "flag provided but not defined: -undefined"
        );
    }

    #[test]
    fn test_help_is_requested_when_not_declared() {
        let mut flags = FlagSet::new();
        for spelling in ["-h", "-help", "--help"] {
            let err = flags.parse(&argv(&[spelling])).unwrap_err();
            assert_eq!(err, FlagError::HelpRequested, "spelling {spelling}");
        }
    }

    #[test]
    fn test_declared_help_flag_takes_precedence() {
        let mut flags = FlagSet::new();
        flags.boolean("help", false, "user-defined help");
        flags.parse(&argv(&["-help"])).unwrap();
        assert_eq!(flags.get_bool("help"), Some(true));
    }

    #[test]
    fn test_missing_argument() {
        let mut flags = FlagSet::new();
        flags.string("name", "World", "your name");
        let err = flags.parse(&argv(&["-name"])).unwrap_err();
        assert_eq!(err.to_string(), "flag needs an argument: -name");
    }

    #[test]
    fn test_invalid_value() {
        let mut flags = FlagSet::new();
        flags.int("nodes", 1, "number of nodes");
        let err = flags.parse(&argv(&["-nodes", "many"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"many\" for flag -nodes: parse error"
        );
    }

    #[test]
    fn test_bad_syntax() {
        let mut flags = FlagSet::new();
        let err = flags.parse(&argv(&["---x"])).unwrap_err();
        assert_eq!(err.to_string(), "bad flag syntax: ---x");
    }

    #[test]
    fn test_redeclaration_overrides() {
        let mut flags = FlagSet::new();
        flags.string("mode", "fast", "global default");
        flags.string("mode", "safe", "local override");

        assert_eq!(flags.len(), 1);
        assert_eq!(flags.get_str("mode"), Some("safe"));
        assert_eq!(flags.lookup("mode").unwrap().usage(), "local override");
    }

    #[test]
    fn test_iteration_is_name_sorted() {
        let mut flags = FlagSet::new();
        flags.string("zeta", "", "");
        flags.string("alpha", "", "");
        flags.string("mid", "", "");

        let names: Vec<&str> = flags.iter().map(Flag::name).collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }
}
