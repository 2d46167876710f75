//! String catalog with locale fallback chains.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::sync::RwLock;

/// Strings for one locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// An empty string set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// A multi-locale string catalog.
///
/// Lookup walks the requested locale, then its fallback chain (a region
/// locale like `pt-BR` implicitly falls back to its language `pt`), then
/// the catalog's default locale.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    locales: HashMap<String, LocaleStrings>,
    fallbacks: HashMap<String, Vec<String>>,
    default_locale: String,
}

impl StringCatalog {
    /// An empty catalog with `en` as the default locale.
    pub fn new() -> Self {
        Self {
            locales: HashMap::new(),
            fallbacks: HashMap::new(),
            default_locale: "en".to_string(),
        }
    }

    /// Change the default locale used as the last fallback.
    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.default_locale = locale.into();
    }

    /// Register the strings for a locale.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// Set an explicit fallback chain for a locale, tried in order before
    /// the default locale.
    pub fn set_fallback_chain(
        &mut self,
        locale: impl Into<String>,
        chain: impl IntoIterator<Item = String>,
    ) {
        self.fallbacks
            .insert(locale.into(), chain.into_iter().collect());
    }

    /// Look up a key for a locale, walking the fallback chain.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        for candidate in self.resolution_order(locale) {
            if let Some(value) = self.locales.get(&candidate).and_then(|s| s.get(key)) {
                return Some(value);
            }
        }
        None
    }

    /// Look up and interpolate `{name}` placeholders from `args`.
    ///
    /// Placeholders without a matching arg are left intact. Returns `None`
    /// when the key is missing in every fallback.
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let template = self.get(locale, key)?;
        let mut out = template.to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        Some(out)
    }

    /// Locales tried for a lookup, in order.
    fn resolution_order(&self, locale: &str) -> Vec<String> {
        let mut order = vec![locale.to_string()];
        if let Some(chain) = self.fallbacks.get(locale) {
            order.extend(chain.iter().cloned());
        } else if let Some((language, _region)) = locale.split_once('-') {
            order.push(language.to_string());
        }
        if !order.contains(&self.default_locale) {
            order.push(self.default_locale.clone());
        }
        order
    }
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys the widgets rely on being present in the built-in catalog.
const BUILTIN_EN: &[(&str, &str)] = &[
    ("close", "Close"),
    ("dismiss", "Dismiss"),
    ("previous", "Previous"),
    ("next", "Next"),
    ("loading", "Loading..."),
    ("open_menu", "Open menu"),
];

fn builtin() -> StringCatalog {
    let mut en = LocaleStrings::new();
    for (key, value) in BUILTIN_EN {
        en.insert(*key, *value);
    }
    let mut catalog = StringCatalog::new();
    catalog.add_locale("en", en);
    catalog
}

struct Global {
    catalog: StringCatalog,
    locale: String,
}

static GLOBAL: LazyLock<RwLock<Global>> = LazyLock::new(|| {
    RwLock::new(Global {
        catalog: builtin(),
        locale: "en".to_string(),
    })
});

/// Resolve a widget label through the global catalog.
///
/// Missing keys return the key itself, so a misconfigured catalog degrades
/// to readable (if unlocalized) output instead of failing.
pub fn label(key: &str) -> String {
    let global = GLOBAL.read().unwrap_or_else(|e| e.into_inner());
    global
        .catalog
        .get(&global.locale, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Change the locale used by [`label`].
pub fn set_locale(locale: impl Into<String>) {
    let mut global = GLOBAL.write().unwrap_or_else(|e| e.into_inner());
    global.locale = locale.into();
}

/// Amend the global catalog, e.g. to add locales at host startup.
pub fn configure<F>(transform: F)
where
    F: FnOnce(&mut StringCatalog),
{
    let mut global = GLOBAL.write().unwrap_or_else(|e| e.into_inner());
    transform(&mut global.catalog);
}
