//! Class-list composition.
//!
//! Every widget derives its base/variant/size classes during construction
//! and inserts them at the *front* of the `class` attribute, so
//! caller-supplied classes come after and win CSS specificity ties. The
//! caller-supplied `remove_class` option is applied as the constructor's
//! final step, against the combined value, for surgical deletion of a
//! derived class.
//!
//! Tokens are whitespace-delimited. No de-duplication is performed;
//! repeated tokens are preserved as-is. Removal is exact-token match.

use ahash::AHashSet;

use crate::attrs::AttrMap;

/// The attribute the composition operations target.
pub const CLASS_ATTR: &str = "class";

/// The option key consumed by [`apply_remove_option`].
pub const REMOVE_CLASS_OPTION: &str = "remove_class";

/// Where to splice incoming tokens relative to the existing class value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before the existing tokens. Used for derived/base classes.
    Front,
    /// After the existing tokens.
    Back,
}

/// Join optional class parts with single spaces, skipping `None` and empty
/// parts.
pub fn join<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Splice `tokens` into the bag's `class` attribute at the given position.
///
/// `tokens` is split on whitespace; blank input leaves the bag untouched.
pub fn add(attrs: &mut AttrMap, tokens: &str, position: Position) {
    let incoming: Vec<&str> = tokens.split_whitespace().collect();
    if incoming.is_empty() {
        return;
    }
    let existing = attrs.get_str(CLASS_ATTR).unwrap_or("").to_string();
    let current: Vec<&str> = existing.split_whitespace().collect();
    let combined: Vec<&str> = match position {
        Position::Front => incoming.iter().chain(current.iter()).copied().collect(),
        Position::Back => current.iter().chain(incoming.iter()).copied().collect(),
    };
    attrs.set(CLASS_ATTR, combined.join(" "));
}

/// Drop every token of `from` that exactly matches a token in `removal`.
///
/// Blank `from` yields the empty string; blank `removal` returns `from`
/// unchanged. Idempotent: removing twice equals removing once.
pub fn remove(removal: &str, from: &str) -> String {
    if from.trim().is_empty() {
        return String::new();
    }
    if removal.trim().is_empty() {
        return from.to_string();
    }
    let drop: AHashSet<&str> = removal.split_whitespace().collect();
    from.split_whitespace()
        .filter(|token| !drop.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Consume the bag's `remove_class` option and apply it to the current
/// `class` value. Constructors call this last, after all derived classes
/// are in place.
pub fn apply_remove_option(attrs: &mut AttrMap) {
    let Some(removal) = attrs.take_str(REMOVE_CLASS_OPTION) else {
        return;
    };
    let current = attrs.get_str(CLASS_ATTR).unwrap_or("").to_string();
    let cleaned = remove(&removal, &current);
    if cleaned.is_empty() {
        attrs.take(CLASS_ATTR);
    } else {
        attrs.set(CLASS_ATTR, cleaned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn join_skips_none_and_blank_parts() {
        let joined = join([Some("a"), None, Some(""), Some("  "), Some("b c")]);
        assert_eq!(joined, "a b c");
    }

    #[test]
    fn add_front_places_derived_before_caller_classes() {
        let mut attrs = AttrMap::new().with("class", "caller-one caller-two");
        add(&mut attrs, "base variant", Position::Front);
        assert_eq!(
            attrs.get_str(CLASS_ATTR),
            Some("base variant caller-one caller-two")
        );
    }

    #[test]
    fn add_back_appends() {
        let mut attrs = AttrMap::new().with("class", "a");
        add(&mut attrs, "b", Position::Back);
        assert_eq!(attrs.get_str(CLASS_ATTR), Some("a b"));
    }

    #[test]
    fn add_does_not_deduplicate() {
        let mut attrs = AttrMap::new().with("class", "a");
        add(&mut attrs, "a a", Position::Front);
        assert_eq!(attrs.get_str(CLASS_ATTR), Some("a a a"));
    }

    #[test]
    fn add_blank_tokens_is_a_no_op() {
        let mut attrs = AttrMap::new();
        add(&mut attrs, "   ", Position::Front);
        assert!(!attrs.contains(CLASS_ATTR));
    }

    #[test]
    fn remove_is_exact_token_match() {
        assert_eq!(remove("bar", "foo bar barbaz"), "foo barbaz");
    }

    #[test]
    fn remove_blank_from_yields_empty() {
        assert_eq!(remove("a", "   "), "");
        assert_eq!(remove("a", ""), "");
    }

    #[test]
    fn remove_blank_removal_returns_input_unchanged() {
        assert_eq!(remove("", "foo  bar"), "foo  bar");
    }

    #[test]
    fn remove_drops_every_occurrence() {
        assert_eq!(remove("a", "a b a c a"), "b c");
    }

    #[test]
    fn apply_remove_option_consumes_the_key() {
        let mut attrs = AttrMap::new()
            .with("class", "foo bar")
            .with("remove_class", "bar");
        apply_remove_option(&mut attrs);
        assert_eq!(attrs.get_str(CLASS_ATTR), Some("foo"));
        assert!(!attrs.contains(REMOVE_CLASS_OPTION));
    }

    #[test]
    fn apply_remove_option_drops_emptied_class_attribute() {
        let mut attrs = AttrMap::new()
            .with("class", "foo")
            .with("remove_class", "foo");
        apply_remove_option(&mut attrs);
        assert!(!attrs.contains(CLASS_ATTR));
    }

    proptest! {
        #[test]
        fn remove_is_idempotent(
            removal in "[a-c ]{0,12}",
            from in "[a-d ]{0,16}",
        ) {
            let once = remove(&removal, &from);
            let twice = remove(&removal, &once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn removed_tokens_are_absent(
            removal in "[a-c]{1,3}",
            from in "[a-d ]{0,16}",
        ) {
            let cleaned = remove(&removal, &from);
            prop_assert!(!cleaned.split_whitespace().any(|t| t == removal));
        }
    }
}
