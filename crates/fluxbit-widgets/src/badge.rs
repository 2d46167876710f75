//! Badge component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable, validate};

use crate::base::Attachment;

/// Supported badge colors.
pub const COLORS: &[&str] = &[
    "info", "dark", "failure", "success", "warning", "indigo", "purple", "pink",
];

const DEFAULT_COLOR: &str = "info";
const DEFAULT_SIZE: usize = 0;

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "inline-flex items-center justify-center font-medium")
        .table("colors", |t| {
            t.classes("info", "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300")
                .classes("dark", "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300")
                .classes("failure", "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300")
                .classes(
                    "success",
                    "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
                )
                .classes(
                    "warning",
                    "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300",
                )
                .classes(
                    "indigo",
                    "bg-indigo-100 text-indigo-800 dark:bg-indigo-900 dark:text-indigo-300",
                )
                .classes(
                    "purple",
                    "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-300",
                )
                .classes("pink", "bg-pink-100 text-pink-800 dark:bg-pink-900 dark:text-pink-300")
        })
        .list("sizes", ["text-xs px-2.5 py-0.5", "text-sm px-3 py-0.5"])
        .classes("rounded", "rounded-sm")
        .classes("pill", "rounded-full")
        .classes("link", "hover:underline")
        .build()
}

/// Style table for the badge family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A small count-or-label marker.
///
/// Renders a `span`, or an `a` when `href` is given.
#[derive(Debug)]
pub struct Badge {
    attrs: AttrMap,
    href: Option<String>,
    content: Markup,
    attachment: Attachment,
}

impl Badge {
    /// Recognized options: `color` (default `info`), `size` (index, default
    /// 0), `pill`, `href`, `remove_class`, and the attachment options of
    /// [`Attachment`]. Everything else passes through.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let color = attrs.take_str("color");
        let color = validate(color.as_deref(), Some(COLORS), DEFAULT_COLOR);
        let size = attrs.take_int("size").unwrap_or(DEFAULT_SIZE as i64);
        let pill = attrs.take_flag("pill", false);
        let href = attrs.take_str("href");

        let shape = if pill { "pill" } else { "rounded" };
        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            Some(styles.resolve(&["colors", color], "")),
            Some(styles.size_class("sizes", size, DEFAULT_SIZE)),
            Some(styles.resolve(&[shape], "")),
            href.as_ref().map(|_| styles.resolve(&["link"], "")),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        let attachment = Attachment::take_from(&mut attrs, "badge");
        class_list::apply_remove_option(&mut attrs);

        Self {
            attrs,
            href,
            content: Markup::Empty,
            attachment,
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

impl Component for Badge {
    fn before_render(&mut self) {
        self.attachment.wire(&mut self.attrs);
    }

    fn render(&self) -> Markup {
        let tag = if self.href.is_some() { "a" } else { "span" };
        let mut el = Element::new(tag).with_attrs(self.attrs.clone());
        if let Some(href) = &self.href {
            el = el.attr("href", href.as_str());
        }
        let root = el.child(self.content.clone()).build();
        self.attachment.append_to(root)
    }
}
