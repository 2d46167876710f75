//! Nested style tables with never-raising lookup.

use ahash::AHashMap;

/// A value in a [`StyleTable`]: a class string, a nested table, or an
/// ordered list addressed by integer index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleValue {
    /// Space-separated CSS class tokens.
    Classes(String),
    /// A nested table.
    Table(StyleTable),
    /// An ordered list of class strings, for integer-indexed variants
    /// (sizes).
    List(Vec<String>),
}

/// An immutable nested mapping from symbolic keys to class strings.
///
/// One table per component family, shared process-wide via
/// [`StyleScope`](crate::scope::StyleScope). Lookup never panics: absent
/// segments and wrong-kind terminals resolve to the caller's fallback.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTable {
    entries: AHashMap<String, StyleValue>,
}

impl StyleTable {
    /// Start building a table.
    pub fn builder() -> StyleTableBuilder {
        StyleTableBuilder {
            entries: AHashMap::new(),
        }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Walk a path of keys through nested tables to a class string.
    pub fn classes(&self, path: &[&str]) -> Option<&str> {
        let (last, init) = path.split_last()?;
        let mut table = self;
        for key in init {
            match table.get(key) {
                Some(StyleValue::Table(nested)) => table = nested,
                _ => return None,
            }
        }
        match table.get(last) {
            Some(StyleValue::Classes(classes)) => Some(classes),
            _ => None,
        }
    }

    /// Resolve a path, falling back when any segment is absent or the
    /// terminal is not a class string.
    pub fn resolve<'a>(&'a self, path: &[&str], fallback: &'a str) -> &'a str {
        match self.classes(path) {
            Some(classes) => classes,
            None => {
                tracing::debug!(?path, fallback, "style path missing, using fallback");
                fallback
            }
        }
    }

    /// Look up an integer-indexed list entry.
    ///
    /// Negative indices use `default_index`; out-of-range indices clamp to
    /// the last entry. A missing or empty list yields the empty string.
    pub fn size_class(&self, key: &str, index: i64, default_index: usize) -> &str {
        let Some(StyleValue::List(items)) = self.get(key) else {
            tracing::debug!(key, "size list missing, using empty classes");
            return "";
        };
        if items.is_empty() {
            return "";
        }
        let index = if index < 0 {
            default_index
        } else {
            index as usize
        };
        &items[index.min(items.len() - 1)]
    }
}

/// Builder for [`StyleTable`].
#[derive(Debug)]
pub struct StyleTableBuilder {
    entries: AHashMap<String, StyleValue>,
}

impl StyleTableBuilder {
    /// Set a class string.
    #[must_use]
    pub fn classes(mut self, key: &str, value: &str) -> Self {
        self.entries
            .insert(key.to_string(), StyleValue::Classes(value.to_string()));
        self
    }

    /// Set a nested table.
    #[must_use]
    pub fn table(mut self, key: &str, build: impl FnOnce(Self) -> Self) -> Self {
        let nested = build(StyleTable::builder()).build();
        self.entries
            .insert(key.to_string(), StyleValue::Table(nested));
        self
    }

    /// Set an ordered list for integer-indexed variants.
    #[must_use]
    pub fn list<I, S>(mut self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.insert(key.to_string(), StyleValue::List(items));
        self
    }

    /// Finish the table.
    pub fn build(self) -> StyleTable {
        StyleTable {
            entries: self.entries,
        }
    }
}

/// Normalize an enum-like option against an allowed collection.
///
/// Returns `value` when `allowed` is `None` (no constraint) or contains it;
/// otherwise `default`. A missing value yields `default`. This is the
/// single sanitization point for colors, sizes, placements, and the like:
/// an unsupported option never raises, it silently degrades.
pub fn validate<'a>(value: Option<&'a str>, allowed: Option<&[&str]>, default: &'a str) -> &'a str {
    match value {
        None => default,
        Some(v) => match allowed {
            None => v,
            Some(list) if list.contains(&v) => v,
            Some(_) => {
                tracing::debug!(value = v, default, "unsupported option, using default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_without_constraint_passes_value_through() {
        assert_eq!(validate(Some("anything"), None, "default"), "anything");
    }

    #[test]
    fn validate_accepts_member_of_allowed() {
        assert_eq!(validate(Some("red"), Some(&["red", "blue"]), "blue"), "red");
    }

    #[test]
    fn validate_rejects_non_member() {
        assert_eq!(
            validate(Some("green"), Some(&["red", "blue"]), "blue"),
            "blue"
        );
    }

    #[test]
    fn validate_missing_value_uses_default() {
        assert_eq!(validate(None, Some(&["red"]), "red"), "red");
        assert_eq!(validate(None, None, "red"), "red");
    }

    #[test]
    fn classes_on_non_table_segment_is_none() {
        let table = StyleTable::builder().classes("base", "x").build();
        assert_eq!(table.classes(&["base", "deeper"]), None);
    }

    #[test]
    fn classes_on_empty_path_is_none() {
        let table = StyleTable::builder().classes("base", "x").build();
        assert_eq!(table.classes(&[]), None);
    }

    #[test]
    fn resolve_on_list_terminal_falls_back() {
        let table = StyleTable::builder().list("sizes", ["a", "b"]).build();
        assert_eq!(table.resolve(&["sizes"], "fb"), "fb");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn table_round_trips_through_serde() {
        let table = StyleTable::builder()
            .classes("base", "x")
            .table("colors", |t| t.classes("info", "y"))
            .list("sizes", ["a", "b"])
            .build();
        let json = serde_json::to_string(&table).unwrap();
        let back: StyleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
