//! Insertion-ordered attribute bags.
//!
//! [`AttrMap`] is the property bag every component is constructed from and
//! the attribute set it renders with. Recognized option keys are consumed
//! destructively during construction (`take_*`); whatever remains passes
//! through verbatim to the output element, so arbitrary `data-*`, `aria-*`,
//! and event-handler attributes survive untouched. There is no allow-list.
//!
//! Entries keep insertion order. Setting an existing key replaces its value
//! in place, preserving the original position.

use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Ordinary string value, escaped on serialization.
    Text(String),
    /// Integer value, rendered in decimal.
    Int(i64),
    /// Boolean attribute. `true` renders as a bare attribute name
    /// (`disabled`), `false` renders nothing.
    Flag(bool),
}

impl AttrValue {
    /// The value as a string slice, for [`AttrValue::Text`] only.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Insertion-ordered attribute bag.
///
/// Attribute counts are small (rarely more than a dozen), so lookups are a
/// linear scan over the entry vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttrMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttrMap {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style bare boolean attribute.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.set(name, AttrValue::Flag(true));
        self
    }

    /// Set an attribute. Replaces in place if the key exists, keeping its
    /// original position; appends otherwise.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Whether the key is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Get a value by key.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a text value by key. Non-text values return `None`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Remove and return a value. This is the consumption primitive: once an
    /// option key is taken it no longer appears in the rendered output.
    pub fn take(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Remove and return a value coerced to a string. Flags coerce to
    /// `"true"`/`"false"`, integers to decimal.
    pub fn take_str(&mut self, name: &str) -> Option<String> {
        self.take(name).map(|v| v.to_string())
    }

    /// Remove and return a boolean option. Missing keys and non-boolean text
    /// yield `default`; the text values `"true"`/`"false"` are honored.
    pub fn take_flag(&mut self, name: &str, default: bool) -> bool {
        match self.take(name) {
            Some(AttrValue::Flag(b)) => b,
            Some(AttrValue::Text(s)) => match s.as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            Some(AttrValue::Int(_)) | None => default,
        }
    }

    /// Remove and return an integer option, parsing text values.
    pub fn take_int(&mut self, name: &str) -> Option<i64> {
        match self.take(name) {
            Some(AttrValue::Int(i)) => Some(i),
            Some(AttrValue::Text(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}
