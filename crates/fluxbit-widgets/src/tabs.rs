//! Tabs component.
//!
//! Tabs are a repeated slot; each pairs a button in the tab list with a
//! content panel. Button and panel ids derive from the tab group's own id
//! (`<id>-tab-<i>` / `<id>-panel-<i>`) for the `data-tabs-*` behavior
//! layer and ARIA wiring. A failing panel producer is isolated to its own
//! panel via [`Tabs::try_add_tab`].

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::SlotList;
use fluxbit_style::{StyleScope, StyleTable, validate};

/// Supported tab bar variants.
pub const VARIANTS: &[&str] = &["default", "underline", "pills", "full_width"];

const DEFAULT_VARIANT: &str = "default";

fn defaults() -> StyleTable {
    StyleTable::builder()
        .table("list", |t| {
            t.classes(
                "default",
                "flex flex-wrap text-sm font-medium text-center text-gray-500 border-b \
                 border-gray-200 dark:border-gray-700 dark:text-gray-400",
            )
            .classes(
                "underline",
                "flex flex-wrap -mb-px text-sm font-medium text-center text-gray-500 \
                 dark:text-gray-400",
            )
            .classes(
                "pills",
                "flex flex-wrap text-sm font-medium text-center text-gray-500 dark:text-gray-400",
            )
            .classes(
                "full_width",
                "grid w-full grid-flow-col text-sm font-medium text-center text-gray-500 \
                 divide-x divide-gray-200 rounded-lg shadow-sm rtl:divide-x-reverse \
                 dark:divide-gray-700 dark:text-gray-400",
            )
        })
        .table("tab", |t| {
            t.classes("default", "inline-block p-4 rounded-t-lg hover:bg-gray-50 dark:hover:bg-gray-800")
                .classes(
                    "underline",
                    "inline-block p-4 border-b-2 border-transparent rounded-t-lg \
                     hover:text-gray-600 hover:border-gray-300 dark:hover:text-gray-300",
                )
                .classes("pills", "inline-block px-4 py-3 rounded-lg hover:text-gray-900 hover:bg-gray-100 dark:hover:bg-gray-800 dark:hover:text-white")
                .classes("full_width", "inline-block w-full p-4 focus:ring-4 focus:ring-blue-300 focus:outline-none")
        })
        .table("active", |t| {
            t.classes("default", "text-blue-600 bg-gray-100 dark:bg-gray-800 dark:text-blue-500")
                .classes(
                    "underline",
                    "text-blue-600 border-blue-600 dark:text-blue-500 dark:border-blue-500",
                )
                .classes("pills", "text-white bg-blue-600")
                .classes("full_width", "text-gray-900 bg-gray-100 dark:bg-gray-700 dark:text-white")
        })
        .classes("disabled", "cursor-not-allowed text-gray-400 dark:text-gray-500")
        .classes("item", "me-2")
        .classes("panel", "hidden p-4 rounded-lg bg-gray-50 dark:bg-gray-800")
        .build()
}

/// Style table for the tabs family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// One tab: its label, panel content, and state flags.
#[derive(Debug)]
pub struct Tab {
    label: String,
    content: Markup,
    active: bool,
    disabled: bool,
}

impl Tab {
    /// Create a tab from a label and panel content.
    pub fn new(label: impl Into<String>, content: Markup) -> Self {
        Self {
            label: label.into(),
            content,
            active: false,
            disabled: false,
        }
    }

    /// Mark this tab as the initially active one.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Mark this tab as non-interactive.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A tab bar plus its content panels.
#[derive(Debug)]
pub struct Tabs {
    attrs: AttrMap,
    id: RandomId,
    variant: String,
    tabs: SlotList<Tab>,
}

impl Tabs {
    /// Recognized options: `variant` (default `default`), `remove_class`.
    /// A caller-supplied `id` wins over the generated one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let variant = attrs.take_str("variant");
        let variant = validate(variant.as_deref(), Some(VARIANTS), DEFAULT_VARIANT).to_string();
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("tabs"),
            variant,
            tabs: SlotList::new(),
        }
    }

    /// Append a tab. Insertion order is rendering order.
    #[must_use]
    pub fn add_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Append a tab whose panel content comes from a fallible producer.
    ///
    /// A failed producer is isolated to its own panel: the error is logged
    /// and the tab renders with empty content, keeping the surrounding tab
    /// indices stable.
    #[must_use]
    pub fn try_add_tab<E, F>(mut self, label: impl Into<String>, produce: F) -> Self
    where
        E: std::fmt::Display,
        F: FnOnce() -> Result<Markup, E>,
    {
        let content = match produce() {
            Ok(content) => content,
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%error, tab = self.tabs.len(), "tab panel producer failed");
                #[cfg(not(feature = "tracing"))]
                let _ = error;
                Markup::Empty
            }
        };
        self.tabs.push(Tab::new(label, content));
        self
    }
}

impl Component for Tabs {
    fn before_render(&mut self) {
        ensure_id(&mut self.attrs, &self.id);
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let group_id = self.attrs.get_str("id").unwrap_or("").to_string();
        let content_id = format!("{group_id}-content");

        let mut list_attrs = self.attrs.clone();
        class_list::add(
            &mut list_attrs,
            styles.resolve(&["list", self.variant.as_str()], ""),
            Position::Front,
        );
        list_attrs.set("data-tabs-toggle", format!("#{content_id}"));
        list_attrs.set("role", "tablist");

        let list = Element::new("ul")
            .with_attrs(list_attrs)
            .children(self.tabs.iter().enumerate().map(|(index, tab)| {
                let tab_id = format!("{group_id}-tab-{index}");
                let panel_id = format!("{group_id}-panel-{index}");
                let button_classes = class_list::join([
                    Some(styles.resolve(&["tab", self.variant.as_str()], "")),
                    tab.active
                        .then(|| styles.resolve(&["active", self.variant.as_str()], "")),
                    tab.disabled.then(|| styles.resolve(&["disabled"], "")),
                ]);
                let mut button = Element::new("button")
                    .attr("id", tab_id.as_str())
                    .attr("type", "button")
                    .class(button_classes)
                    .attr("data-tabs-target", format!("#{panel_id}"))
                    .attr("role", "tab")
                    .attr("aria-controls", panel_id.as_str())
                    .attr("aria-selected", if tab.active { "true" } else { "false" });
                if tab.disabled {
                    button = button.attr("disabled", true);
                }
                Element::new("li")
                    .class(styles.resolve(&["item"], ""))
                    .attr("role", "presentation")
                    .child(button.text(tab.label.clone()).build())
                    .build()
            }))
            .build();

        let panels = Element::new("div")
            .attr("id", content_id.as_str())
            .children(self.tabs.iter().enumerate().map(|(index, tab)| {
                Element::new("div")
                    .attr("id", format!("{group_id}-panel-{index}"))
                    .class(styles.resolve(&["panel"], ""))
                    .attr("role", "tabpanel")
                    .attr("aria-labelledby", format!("{group_id}-tab-{index}"))
                    .child(tab.content.clone())
                    .build()
            }))
            .build();

        Markup::Fragment(vec![list, panels])
    }
}
