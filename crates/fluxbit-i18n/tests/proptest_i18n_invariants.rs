//! Property-based invariant tests for the i18n subsystem.
//!
//! Verifies structural guarantees of catalog lookup and interpolation:
//!
//! 1. Lookup never panics for arbitrary locale and key strings
//! 2. Missing keys always return None on an empty catalog
//! 3. Interpolation with no placeholders is identity
//! 4. Interpolation is idempotent (no recursive substitution)
//! 5. Missing args leave placeholder tokens intact
//! 6. Region locales resolve whenever their base language resolves

use fluxbit_i18n::{LocaleStrings, StringCatalog};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lookup_never_panics(locale in "\\PC{0,12}", key in "\\PC{0,12}") {
        let catalog = StringCatalog::new();
        let _ = catalog.get(&locale, &key);
        let _ = catalog.format(&locale, &key, &[]);
    }

    #[test]
    fn missing_key_is_none_on_empty_catalog(key in "[a-z_]{1,16}") {
        let catalog = StringCatalog::new();
        prop_assert_eq!(catalog.get("en", &key), None);
    }

    #[test]
    fn interpolation_without_placeholders_is_identity(value in "[a-zA-Z0-9 .!]{0,32}") {
        let mut en = LocaleStrings::new();
        en.insert("key", value.clone());
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        prop_assert_eq!(catalog.format("en", "key", &[]), Some(value));
    }

    #[test]
    fn interpolation_is_idempotent(name in "[a-z]{1,8}") {
        let mut en = LocaleStrings::new();
        en.insert("key", "Hello, {name}!");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        let once = catalog.format("en", "key", &[("name", &name)]).unwrap();
        // Substituting again changes nothing: the arg value carries no
        // placeholder syntax.
        let mut again = once.clone();
        again = again.replace("{name}", &name);
        prop_assert_eq!(once, again);
    }

    #[test]
    fn missing_args_leave_placeholders(key in "[a-z]{1,8}") {
        let mut en = LocaleStrings::new();
        en.insert(key.clone(), "value is {missing}");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        let formatted = catalog.format("en", &key, &[("other", "x")]).unwrap();
        prop_assert!(formatted.contains("{missing}"), "placeholder should remain");
    }

    #[test]
    fn region_locale_falls_back_to_language(region in "[A-Z]{2}") {
        let mut base = LocaleStrings::new();
        base.insert("close", "Fechar");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("pt", base);
        let locale = format!("pt-{region}");
        prop_assert_eq!(catalog.get(&locale, "close"), Some("Fechar"));
    }
}
