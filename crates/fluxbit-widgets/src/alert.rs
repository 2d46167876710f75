//! Alert component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable, validate};

use crate::icons;

/// Supported alert colors.
pub const COLORS: &[&str] = &["info", "failure", "success", "warning", "dark"];

const DEFAULT_COLOR: &str = "info";

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "flex items-center p-4 mb-4 text-sm rounded-lg")
        .table("colors", |t| {
            t.classes("info", "text-blue-800 bg-blue-50 dark:bg-gray-800 dark:text-blue-400")
                .classes("failure", "text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400")
                .classes(
                    "success",
                    "text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400",
                )
                .classes(
                    "warning",
                    "text-yellow-800 bg-yellow-50 dark:bg-gray-800 dark:text-yellow-300",
                )
                .classes("dark", "text-gray-800 bg-gray-50 dark:bg-gray-800 dark:text-gray-300")
        })
        .classes("icon", "shrink-0 inline w-4 h-4 me-3")
        .classes("content", "font-medium")
        .table("dismiss", |t| {
            t.classes(
                "button",
                "ms-auto -mx-1.5 -my-1.5 rounded-lg focus:ring-2 p-1.5 inline-flex items-center \
                 justify-center h-8 w-8 hover:bg-gray-100 dark:hover:bg-gray-700",
            )
            .classes("icon", "w-3 h-3")
        })
        .build()
}

/// Style table for the alert family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A contextual message box, optionally dismissible.
#[derive(Debug)]
pub struct Alert {
    attrs: AttrMap,
    id: RandomId,
    dismissible: bool,
    icon: bool,
    content: Markup,
}

impl Alert {
    /// Recognized options: `color` (default `info`), `icon` (default
    /// true), `dismissible`, `remove_class`. Everything else passes
    /// through.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let color = attrs.take_str("color");
        let color = validate(color.as_deref(), Some(COLORS), DEFAULT_COLOR);
        let icon = attrs.take_flag("icon", true);
        let dismissible = attrs.take_flag("dismissible", false);

        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            Some(styles.resolve(&["colors", color], "")),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        class_list::apply_remove_option(&mut attrs);

        Self {
            attrs,
            id: RandomId::new("alert"),
            dismissible,
            icon,
            content: Markup::Empty,
        }
    }

    /// Set escaped text content.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.content(Markup::text(content))
    }

    /// Set arbitrary markup content.
    #[must_use]
    pub fn content(mut self, content: Markup) -> Self {
        self.content = content;
        self
    }
}

impl Component for Alert {
    fn before_render(&mut self) {
        self.attrs.set("role", "alert");
        // The dismiss button targets the root by id, so one must exist.
        if self.dismissible {
            ensure_id(&mut self.attrs, &self.id);
        }
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let icon = if self.icon {
            icons::info_circle(AttrMap::new().with("class", styles.resolve(&["icon"], "")))
        } else {
            Markup::Empty
        };
        let content = Element::new("div")
            .class(styles.resolve(&["content"], ""))
            .child(self.content.clone())
            .build();
        let dismiss = if self.dismissible {
            let target = self.attrs.get_str("id").unwrap_or("");
            Element::new("button")
                .attr("type", "button")
                .class(styles.resolve(&["dismiss", "button"], ""))
                .attr("data-dismiss-target", format!("#{target}"))
                .attr("aria-label", fluxbit_i18n::label("close"))
                .child(icons::close(
                    AttrMap::new().with("class", styles.resolve(&["dismiss", "icon"], "")),
                ))
                .build()
        } else {
            Markup::Empty
        };
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .child(icon)
            .child(content)
            .child(dismiss)
            .build()
    }
}
