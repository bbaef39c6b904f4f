//! Typed flag values.
//!
//! A [`FlagValue`] carries both the type and the current value of a
//! declared flag. The variant chosen at declaration time decides how
//! command-line tokens are parsed for that flag and how the value is
//! presented in help output.

use std::fmt;

/// A typed flag value.
///
/// The declaration default fixes the variant; parsing a token always
/// produces the same variant or fails.
///
/// # Examples
///
/// ```
/// use cmdtree_flags::FlagValue;
///
/// let v = FlagValue::Int(0);
/// assert!(v.is_zero());
/// assert_eq!(v.parse_token("42"), Ok(FlagValue::Int(42)));
/// assert!(v.parse_token("forty-two").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// Boolean flag; takes no argument unless given as `-name=false`.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),
}

impl FlagValue {
    /// Type tag used in help output, `None` for booleans.
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            FlagValue::Bool(_) => None,
            FlagValue::Int(_) => Some("int"),
            FlagValue::Float(_) => Some("float"),
            FlagValue::Str(_) => Some("string"),
        }
    }

    /// Whether this value equals its type's zero value.
    ///
    /// Help output suppresses the `(default …)` suffix for zero
    /// defaults.
    pub fn is_zero(&self) -> bool {
        match self {
            FlagValue::Bool(b) => !b,
            FlagValue::Int(i) => *i == 0,
            FlagValue::Float(f) => *f == 0.0,
            FlagValue::Str(s) => s.is_empty(),
        }
    }

    /// Parses `token` into the same variant as `self`.
    ///
    /// The `Err` carries a short reason suitable for embedding in a
    /// parse diagnostic.
    pub fn parse_token(&self, token: &str) -> Result<FlagValue, String> {
        match self {
            FlagValue::Bool(_) => match token {
                "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(FlagValue::Bool(true)),
                "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(FlagValue::Bool(false)),
                _ => Err("parse error".to_string()),
            },
            FlagValue::Int(_) => token
                .parse::<i64>()
                .map(FlagValue::Int)
                .map_err(|_| "parse error".to_string()),
            FlagValue::Float(_) => token
                .parse::<f64>()
                .map(FlagValue::Float)
                .map_err(|_| "parse error".to_string()),
            FlagValue::Str(_) => Ok(FlagValue::Str(token.to_string())),
        }
    }

    /// Returns the boolean value, if this is a boolean flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer flag.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float flag.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FlagValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{b}"),
            FlagValue::Int(i) => write!(f, "{i}"),
            FlagValue::Float(v) => write!(f, "{v}"),
            FlagValue::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert!(FlagValue::Bool(false).is_zero());
        assert!(FlagValue::Int(0).is_zero());
        assert!(FlagValue::Float(0.0).is_zero());
        assert!(FlagValue::Str(String::new()).is_zero());

        assert!(!FlagValue::Bool(true).is_zero());
        assert!(!FlagValue::Int(-1).is_zero());
        assert!(!FlagValue::Str("World".into()).is_zero());
    }

    #[test]
    fn test_parse_token_keeps_variant() {
        let b = FlagValue::Bool(false);
        assert_eq!(b.parse_token("true"), Ok(FlagValue::Bool(true)));
        assert_eq!(b.parse_token("0"), Ok(FlagValue::Bool(false)));
        assert!(b.parse_token("yes").is_err());

        let i = FlagValue::Int(1);
        assert_eq!(i.parse_token("-7"), Ok(FlagValue::Int(-7)));
        assert!(i.parse_token("7.5").is_err());

        let s = FlagValue::Str(String::new());
        assert_eq!(s.parse_token("x=y"), Ok(FlagValue::Str("x=y".into())));
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(FlagValue::Bool(true).type_tag(), None);
        assert_eq!(FlagValue::Int(0).type_tag(), Some("int"));
        assert_eq!(FlagValue::Float(0.0).type_tag(), Some("float"));
        assert_eq!(FlagValue::Str(String::new()).type_tag(), Some("string"));
    }
}
