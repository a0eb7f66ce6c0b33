//! Argument specifications and resolved option values

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A typed argument value.
///
/// `Unset` is the sentinel for an argument that declares no default and was
/// not supplied by the user; it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Unset,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    pub fn is_set(&self) -> bool {
        !matches!(self, ArgValue::Unset)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ArgValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view: integers widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::Float(f) => Some(*f),
            ArgValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Unset => write!(f, "<unset>"),
            ArgValue::Str(s) => write!(f, "{s}"),
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Float(v) => write!(f, "{v}"),
            ArgValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

/// The closed set of value kinds an argument can convert to.
///
/// `Custom` functions receive the raw user input string and must treat it as
/// tainted.
#[derive(Debug, Clone, Copy)]
pub enum ArgKind {
    Str,
    Int,
    Float,
    Bool,
    Custom(fn(&str) -> std::result::Result<ArgValue, String>),
}

impl ArgKind {
    /// Convert a raw user string into a typed value.
    pub fn convert(&self, raw: &str) -> std::result::Result<ArgValue, String> {
        match self {
            ArgKind::Str => Ok(ArgValue::Str(raw.to_string())),
            ArgKind::Int => raw
                .parse::<i64>()
                .map(ArgValue::Int)
                .map_err(|e| e.to_string()),
            ArgKind::Float => raw
                .parse::<f64>()
                .map(ArgValue::Float)
                .map_err(|e| e.to_string()),
            ArgKind::Bool => match raw {
                "true" | "yes" | "1" => Ok(ArgValue::Bool(true)),
                "false" | "no" | "0" => Ok(ArgValue::Bool(false)),
                _ => Err(format!("not a boolean: '{raw}'")),
            },
            ArgKind::Custom(convert) => convert(raw),
        }
    }
}

/// Specification of one configurable argument of a tool plugin.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: String,
    kind: ArgKind,
    doc: String,
    default: ArgValue,
    choices: Option<Vec<String>>,
    visible: bool,
}

impl ArgSpec {
    pub fn new(name: impl Into<String>, kind: ArgKind, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            doc: doc.into(),
            default: ArgValue::Unset,
            choices: None,
            visible: true,
        }
    }

    /// Set the default value (`Unset` when never called).
    pub fn default(mut self, value: impl Into<ArgValue>) -> Self {
        self.default = value.into();
        self
    }

    /// Restrict the argument to a closed set of allowed values.
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Exclude the argument from user-facing help output.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn default_value(&self) -> &ArgValue {
        &self.default
    }

    pub fn choice_set(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Validated options for one tool instance.
///
/// Built exclusively by the resolution pipeline and frozen afterwards; there
/// are no public mutators.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptions {
    values: BTreeMap<String, ArgValue>,
}

impl ResolvedOptions {
    pub(crate) fn from_values(values: BTreeMap<String, ArgValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(ArgValue::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(ArgValue::as_i64)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(ArgValue::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(ArgValue::as_bool)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(ArgValue::is_set)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_conversions() {
        assert_eq!(ArgKind::Str.convert("hello"), Ok(ArgValue::Str("hello".to_string())));
        assert_eq!(ArgKind::Int.convert("42"), Ok(ArgValue::Int(42)));
        assert_eq!(ArgKind::Float.convert("2.5"), Ok(ArgValue::Float(2.5)));
        assert_eq!(ArgKind::Bool.convert("yes"), Ok(ArgValue::Bool(true)));
        assert_eq!(ArgKind::Bool.convert("0"), Ok(ArgValue::Bool(false)));

        assert!(ArgKind::Int.convert("4.2").is_err());
        assert!(ArgKind::Float.convert("notanumber").is_err());
        assert!(ArgKind::Bool.convert("maybe").is_err());
    }

    #[test]
    fn test_custom_kind() {
        fn percent(raw: &str) -> std::result::Result<ArgValue, String> {
            let value: f64 = raw.parse().map_err(|_| format!("not a percentage: {raw}"))?;
            if (0.0..=100.0).contains(&value) {
                Ok(ArgValue::Float(value / 100.0))
            } else {
                Err(format!("out of range: {raw}"))
            }
        }

        let kind = ArgKind::Custom(percent);
        assert_eq!(kind.convert("50"), Ok(ArgValue::Float(0.5)));
        assert!(kind.convert("150").is_err());
        assert!(kind.convert("abc").is_err());
    }

    #[test]
    fn test_spec_builder() {
        let spec = ArgSpec::new("scheme", ArgKind::Str, "color scheme")
            .default("rgb")
            .choices(["rgb", "rainbow"]);
        assert_eq!(spec.name(), "scheme");
        assert_eq!(spec.default_value(), &ArgValue::Str("rgb".to_string()));
        assert_eq!(spec.choice_set(), Some(&["rgb".to_string(), "rainbow".to_string()][..]));
        assert!(spec.is_visible());

        let hidden = ArgSpec::new("gluid", ArgKind::Bool, "internal").hidden();
        assert!(!hidden.is_visible());
        assert_eq!(hidden.default_value(), &ArgValue::Unset);
    }

    #[test]
    fn test_unset_serializes_as_null() {
        assert_eq!(serde_json::to_string(&ArgValue::Unset).unwrap(), "null");
        assert_eq!(serde_json::to_string(&ArgValue::Float(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn test_typed_getters() {
        let mut values = BTreeMap::new();
        values.insert("spacing".to_string(), ArgValue::Float(2.0));
        values.insert("depth".to_string(), ArgValue::Int(3));
        values.insert("shade".to_string(), ArgValue::Str("dark".to_string()));
        let options = ResolvedOptions::from_values(values);

        assert_eq!(options.get_f64("spacing"), Some(2.0));
        assert_eq!(options.get_f64("depth"), Some(3.0));
        assert_eq!(options.get_i64("depth"), Some(3));
        assert_eq!(options.get_str("shade"), Some("dark"));
        assert_eq!(options.get_bool("shade"), None);
        assert!(!options.is_set("missing"));
    }
}
