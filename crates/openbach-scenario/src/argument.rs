//! Argument values and `$name` placeholders
//!
//! Job parameters, scenario constants and sub-scenario argument bindings are
//! all free-form values: the builder records them verbatim and performs no
//! schema validation. A string shaped `$name` is a [`Placeholder`], resolved
//! at execution time by the controller against the enclosing scenario's
//! constants or the parent scenario's argument bindings, never by the
//! builder itself.

use crate::error::PlaceholderError;
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A `$name` marker deferring resolution to the executor
///
/// Stores the bare name; the `$` sigil is re-attached on display and
/// serialization, so the marker round-trips verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placeholder(String);

impl Placeholder {
    /// Create a placeholder for the given constant/argument name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name the executor will resolve, without the `$` sigil
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl FromStr for Placeholder {
    type Err = PlaceholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('$') {
            Some("") => Err(PlaceholderError::EmptyName),
            Some(name) => Ok(Self(name.to_string())),
            None => Err(PlaceholderError::MissingPrefix(s.to_string())),
        }
    }
}

impl Serialize for Placeholder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Placeholder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Free-form argument value
///
/// Covers every value shape a job parameter, constant default or argument
/// binding may take. Placeholders come first so that untagged decoding
/// classifies `$name` strings as markers rather than literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    /// `$name` marker, preserved verbatim
    Placeholder(Placeholder),
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Literal string
    String(String),
    /// Ordered list of values
    List(Vec<Argument>),
    /// Nested map, insertion-ordered
    Map(IndexMap<String, Argument>),
}

impl Argument {
    /// Shorthand for a placeholder value
    #[inline]
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder(Placeholder::new(name))
    }

    /// Whether this value defers resolution to the executor
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// View as a placeholder, if it is one
    #[inline]
    #[must_use]
    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Self::Placeholder(placeholder) => Some(placeholder),
            _ => None,
        }
    }

    /// View as a literal string, if it is one
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Placeholder> for Argument {
    fn from(value: Placeholder) -> Self {
        Self::Placeholder(value)
    }
}

impl From<&str> for Argument {
    /// `$name`-shaped strings become placeholders, anything else a literal
    fn from(value: &str) -> Self {
        value
            .parse::<Placeholder>()
            .map_or_else(|_| Self::String(value.to_string()), Self::Placeholder)
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Argument {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl FromIterator<Argument> for Argument {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Argument)> for Argument {
    fn from_iter<I: IntoIterator<Item = (String, Argument)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_requires_sigil_and_name() {
        assert_eq!("$rate".parse::<Placeholder>().unwrap().name(), "rate");
        assert!(matches!(
            "rate".parse::<Placeholder>(),
            Err(PlaceholderError::MissingPrefix(_))
        ));
        assert!(matches!(
            "$".parse::<Placeholder>(),
            Err(PlaceholderError::EmptyName)
        ));
    }

    #[test]
    fn placeholder_displays_verbatim() {
        let marker = Placeholder::new("server_ip");
        assert_eq!(marker.to_string(), "$server_ip");
    }

    #[test]
    fn string_conversion_detects_markers() {
        assert!(Argument::from("$duration").is_placeholder());
        assert_eq!(Argument::from("eth0"), Argument::String("eth0".into()));
    }

    #[test]
    fn markers_survive_a_json_round_trip() {
        let value = Argument::placeholder("dest");
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, "\"$dest\"");
        let decoded: Argument = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn untagged_decoding_keeps_literals_literal() {
        let decoded: Argument = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(decoded, Argument::String("plain".into()));
        let decoded: Argument = serde_json::from_str("42").unwrap();
        assert_eq!(decoded, Argument::Integer(42));
        let decoded: Argument = serde_json::from_str("2.5").unwrap();
        assert_eq!(decoded, Argument::Float(2.5));
    }

    #[test]
    fn nested_maps_preserve_insertion_order() {
        let value: Argument = [
            ("delay".to_string(), Argument::from(100)),
            ("loss".to_string(), Argument::from(0.5)),
            ("iface".to_string(), Argument::from("eth0")),
        ]
        .into_iter()
        .collect();
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, r#"{"delay":100,"loss":0.5,"iface":"eth0"}"#);
    }
}
