//! Expected values and ordered value-matching rules.

use schemars::JsonSchema;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The value a variable is expected to hold.
///
/// Values are compared through their environment text, i.e. the string the
/// value becomes once it has been exported into a process environment.
///
/// # Example
///
/// ```
/// use envcheck::rules::ExpectedValue;
///
/// assert_eq!(ExpectedValue::from(false).env_text(), "false");
/// assert_eq!(ExpectedValue::from("foo").env_text(), "foo");
/// assert_eq!(ExpectedValue::Null.env_text(), "");
/// ```
///
/// Rules files may not contain floating point numbers: YAML would normalize
/// `1.0` to `1` and `1.10` to `1.1`, so such values must be quoted.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum ExpectedValue {
    /// Absent or null; matches an unset or empty variable.
    Null,
    /// A boolean, exported as `true` or `false`.
    Bool(bool),
    /// An integer, exported in decimal form.
    Integer(i64),
    /// An integer above `i64::MAX`, exported in decimal form.
    Unsigned(u64),
    /// A floating point number, exported in its shortest textual form.
    ///
    /// Only reachable from code; rules files reject unquoted floats.
    Float(f64),
    /// A literal string.
    String(String),
}

impl ExpectedValue {
    /// The text this value takes in a process environment.
    pub fn env_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Unsigned(u) => u.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Whether a live value satisfies this expectation.
    ///
    /// An unset variable reads as empty text.
    pub fn matches(&self, actual: Option<&str>) -> bool {
        actual.unwrap_or_default() == self.env_text()
    }
}

impl From<&str> for ExpectedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ExpectedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ExpectedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ExpectedValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u64> for ExpectedValue {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Self::Unsigned(u), Self::Integer)
    }
}

impl From<f64> for ExpectedValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl<T: Into<ExpectedValue>> From<Option<T>> for ExpectedValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl<'de> Deserialize<'de> for ExpectedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpectedValueVisitor;

        impl<'de> Visitor<'de> for ExpectedValueVisitor {
            type Value = ExpectedValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, a boolean, an integer or a string")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ExpectedValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ExpectedValue::Null)
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                Ok(ExpectedValue::Bool(b))
            }

            fn visit_i64<E: de::Error>(self, i: i64) -> Result<Self::Value, E> {
                Ok(ExpectedValue::Integer(i))
            }

            fn visit_u64<E: de::Error>(self, u: u64) -> Result<Self::Value, E> {
                Ok(ExpectedValue::from(u))
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
                Err(E::custom(format!(
                    "floating point value {} would not keep its written form; quote it (e.g. \"1.0\")",
                    f
                )))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(ExpectedValue::from(s))
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(ExpectedValue::String(s))
            }
        }

        deserializer.deserialize_any(ExpectedValueVisitor)
    }
}

/// Insertion-ordered map of variable names to expected values.
///
/// Inserting a name that is already present replaces its value but keeps
/// its original position.
///
/// # Example
///
/// ```
/// use envcheck::rules::ValueRules;
///
/// let mut rules = ValueRules::new();
/// rules.insert("B", "1");
/// rules.insert("A", true);
/// rules.insert("B", "2");
///
/// let names: Vec<&str> = rules.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["B", "A"]);
/// assert_eq!(rules.get("B").map(|v| v.env_text()), Some("2".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueRules {
    entries: Vec<(String, ExpectedValue)>,
}

impl ValueRules {
    /// Create an empty rule map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the expected value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ExpectedValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up the expected value for `name`.
    pub fn get(&self, name: &str) -> Option<&ExpectedValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExpectedValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return a copy of `self` with every entry of `overlay` applied on top.
    pub fn merged_with(&self, overlay: &ValueRules) -> ValueRules {
        let mut merged = self.clone();
        for (name, value) in overlay.iter() {
            merged.insert(name, value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for ValueRules
where
    K: Into<String>,
    V: Into<ExpectedValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rules = ValueRules::new();
        for (name, value) in iter {
            rules.insert(name, value);
        }
        rules
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ValueRules
where
    K: Into<String>,
    V: Into<ExpectedValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for ValueRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ValueRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueRulesVisitor;

        impl<'de> Visitor<'de> for ValueRulesVisitor {
            type Value = ValueRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of variable names to expected values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut rules = ValueRules::new();
                while let Some((name, value)) = map.next_entry::<String, ExpectedValue>()? {
                    rules.insert(name, value);
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(ValueRulesVisitor)
    }
}
