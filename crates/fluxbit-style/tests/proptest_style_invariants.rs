//! Property-based invariant tests for style resolution.
//!
//! Verifies structural guarantees of tables and validation:
//!
//! 1. `resolve` never panics for arbitrary paths and falls back exactly
//!    when the path is absent
//! 2. `validate` always returns either the value or the default
//! 3. `validate` fallback is idempotent: validating the default is the
//!    default
//! 4. `size_class` never panics and always returns a list member (or
//!    empty for a missing list)
//! 5. An invalid option resolves to the same classes as the default
//!    option, for any allowed set containing the default

use fluxbit_style::{StyleTable, validate};
use proptest::prelude::*;

fn sample() -> StyleTable {
    StyleTable::builder()
        .classes("base", "font-medium")
        .table("colors", |t| {
            t.classes("info", "bg-blue-100")
                .classes("failure", "bg-red-100")
                .classes("success", "bg-green-100")
        })
        .list("sizes", ["text-xs", "text-sm", "text-base", "text-lg"])
        .build()
}

proptest! {
    #[test]
    fn resolve_never_panics(key in "[a-z]{0,8}", nested in "[a-z]{0,8}") {
        let table = sample();
        let _ = table.resolve(&[key.as_str()], "fb");
        let _ = table.resolve(&[key.as_str(), nested.as_str()], "fb");
    }

    #[test]
    fn resolve_falls_back_exactly_on_absent_paths(key in "[a-z]{1,8}") {
        let table = sample();
        let resolved = table.resolve(&["colors", key.as_str()], "fb");
        let expected = table.classes(&["colors", key.as_str()]).unwrap_or("fb");
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn validate_returns_value_or_default(value in "[a-z]{0,8}") {
        let allowed = ["info", "failure", "success"];
        let picked = validate(Some(value.as_str()), Some(&allowed), "info");
        prop_assert!(picked == value || picked == "info");
        if allowed.contains(&value.as_str()) {
            prop_assert_eq!(picked, value.as_str());
        } else {
            prop_assert_eq!(picked, "info");
        }
    }

    #[test]
    fn validate_is_idempotent(value in "[a-z]{0,8}") {
        let allowed = ["info", "failure"];
        let once = validate(Some(value.as_str()), Some(&allowed), "info");
        let twice = validate(Some(once), Some(&allowed), "info");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn size_class_is_total(index in any::<i64>(), default in 0usize..8) {
        let table = sample();
        let class = table.size_class("sizes", index, default);
        prop_assert!(
            ["text-xs", "text-sm", "text-base", "text-lg"].contains(&class)
        );
        prop_assert_eq!(table.size_class("missing", index, default), "");
    }

    #[test]
    fn invalid_option_resolves_like_default(value in "[a-z]{0,8}") {
        let table = sample();
        let allowed = ["info", "failure", "success"];
        let picked = validate(Some(value.as_str()), Some(&allowed), "info");
        if !allowed.contains(&value.as_str()) {
            prop_assert_eq!(
                table.resolve(&["colors", picked], ""),
                table.resolve(&["colors", "info"], "")
            );
        }
    }
}
