//! Process-wide per-family style tables.
//!
//! Each widget family declares one `static` [`StyleScope`] holding its
//! default table. Host applications may override parts of it during
//! startup via [`StyleScope::configure`]; after the first render the table
//! is read-only and safely shared across concurrent renders.

use std::sync::Arc;
use std::sync::OnceLock;

use arc_swap::ArcSwap;

use crate::table::StyleTable;

/// A lazily initialized, atomically swappable style table.
///
/// ```
/// use fluxbit_style::{StyleScope, StyleTable};
///
/// fn defaults() -> StyleTable {
///     StyleTable::builder().classes("base", "rounded").build()
/// }
///
/// static STYLES: StyleScope = StyleScope::new(defaults);
///
/// let table = STYLES.load();
/// assert_eq!(table.resolve(&["base"], ""), "rounded");
/// ```
#[derive(Debug)]
pub struct StyleScope {
    init: fn() -> StyleTable,
    cell: OnceLock<ArcSwap<StyleTable>>,
}

impl StyleScope {
    /// Declare a scope with the family's default table constructor.
    pub const fn new(init: fn() -> StyleTable) -> Self {
        Self {
            init,
            cell: OnceLock::new(),
        }
    }

    fn swap(&self) -> &ArcSwap<StyleTable> {
        self.cell
            .get_or_init(|| ArcSwap::from_pointee((self.init)()))
    }

    /// The current table. Cheap; intended to be called once per component
    /// construction.
    pub fn load(&self) -> Arc<StyleTable> {
        self.swap().load_full()
    }

    /// Replace the table by transforming the current one.
    ///
    /// Intended for host configuration at startup. Calling this after the
    /// first render is unsupported: the swap itself is atomic, but a render
    /// in flight may observe a mix of generations across widgets.
    pub fn configure<F>(&self, transform: F)
    where
        F: FnOnce(StyleTable) -> StyleTable,
    {
        let swap = self.swap();
        let current = swap.load_full();
        swap.store(Arc::new(transform((*current).clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> StyleTable {
        StyleTable::builder()
            .classes("base", "rounded")
            .table("colors", |t| t.classes("info", "bg-blue-100"))
            .build()
    }

    #[test]
    fn load_initializes_from_defaults() {
        static SCOPE: StyleScope = StyleScope::new(defaults);
        assert_eq!(SCOPE.load().resolve(&["base"], ""), "rounded");
    }

    #[test]
    fn configure_replaces_the_table() {
        static SCOPE: StyleScope = StyleScope::new(defaults);
        SCOPE.configure(|_| StyleTable::builder().classes("base", "square").build());
        assert_eq!(SCOPE.load().resolve(&["base"], ""), "square");
    }

    #[test]
    fn configure_sees_current_table() {
        static SCOPE: StyleScope = StyleScope::new(defaults);
        SCOPE.configure(|current| {
            assert_eq!(current.resolve(&["base"], ""), "rounded");
            current
        });
        assert_eq!(SCOPE.load().resolve(&["colors", "info"], ""), "bg-blue-100");
    }

    #[test]
    fn scopes_are_independent() {
        static A: StyleScope = StyleScope::new(defaults);
        static B: StyleScope = StyleScope::new(defaults);
        A.configure(|_| StyleTable::builder().classes("base", "a-only").build());
        assert_eq!(A.load().resolve(&["base"], ""), "a-only");
        assert_eq!(B.load().resolve(&["base"], ""), "rounded");
    }
}
