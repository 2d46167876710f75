//! Button component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable, validate};

use crate::base::Attachment;

/// Supported button colors.
pub const COLORS: &[&str] = &[
    "default",
    "alternative",
    "dark",
    "light",
    "green",
    "red",
    "yellow",
    "purple",
];

const DEFAULT_COLOR: &str = "default";
const DEFAULT_SIZE: usize = 2;

/// Position of a button inside a [`crate::button_group::ButtonGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPosition {
    /// First button: keeps the leading rounding.
    Start,
    /// Any button between first and last.
    Middle,
    /// Last button: keeps the trailing rounding.
    End,
}

impl GroupPosition {
    fn key(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "inline-flex items-center justify-center font-medium text-center focus:ring-4 \
             focus:outline-none",
        )
        .table("colors", |t| {
            t.classes(
                "default",
                "text-white bg-blue-700 hover:bg-blue-800 focus:ring-blue-300 dark:bg-blue-600 \
                 dark:hover:bg-blue-700 dark:focus:ring-blue-800",
            )
            .classes(
                "alternative",
                "text-gray-900 bg-white border border-gray-200 hover:bg-gray-100 \
                 hover:text-blue-700 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-400 \
                 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700",
            )
            .classes(
                "dark",
                "text-white bg-gray-800 hover:bg-gray-900 focus:ring-gray-300 dark:bg-gray-800 \
                 dark:hover:bg-gray-700 dark:focus:ring-gray-700 dark:border-gray-700",
            )
            .classes(
                "light",
                "text-gray-900 bg-white border border-gray-300 hover:bg-gray-100 \
                 focus:ring-gray-100 dark:bg-gray-800 dark:text-white dark:border-gray-600 \
                 dark:hover:bg-gray-700",
            )
            .classes(
                "green",
                "text-white bg-green-700 hover:bg-green-800 focus:ring-green-300 \
                 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800",
            )
            .classes(
                "red",
                "text-white bg-red-700 hover:bg-red-800 focus:ring-red-300 dark:bg-red-600 \
                 dark:hover:bg-red-700 dark:focus:ring-red-900",
            )
            .classes(
                "yellow",
                "text-white bg-yellow-400 hover:bg-yellow-500 focus:ring-yellow-300 \
                 dark:focus:ring-yellow-900",
            )
            .classes(
                "purple",
                "text-white bg-purple-700 hover:bg-purple-800 focus:ring-purple-300 \
                 dark:bg-purple-600 dark:hover:bg-purple-700 dark:focus:ring-purple-900",
            )
        })
        .table("outline", |t| {
            t.classes(
                "default",
                "text-blue-700 border border-blue-700 hover:text-white hover:bg-blue-800 \
                 focus:ring-blue-300 dark:border-blue-500 dark:text-blue-500 \
                 dark:hover:text-white dark:hover:bg-blue-500 dark:focus:ring-blue-800",
            )
            .classes(
                "dark",
                "text-gray-900 border border-gray-800 hover:text-white hover:bg-gray-900 \
                 focus:ring-gray-300 dark:border-gray-600 dark:text-gray-400 \
                 dark:hover:text-white dark:hover:bg-gray-600 dark:focus:ring-gray-800",
            )
            .classes(
                "green",
                "text-green-700 border border-green-700 hover:text-white hover:bg-green-800 \
                 focus:ring-green-300 dark:border-green-500 dark:text-green-500 \
                 dark:hover:text-white dark:hover:bg-green-600 dark:focus:ring-green-800",
            )
            .classes(
                "red",
                "text-red-700 border border-red-700 hover:text-white hover:bg-red-800 \
                 focus:ring-red-300 dark:border-red-500 dark:text-red-500 dark:hover:text-white \
                 dark:hover:bg-red-600 dark:focus:ring-red-900",
            )
        })
        .list(
            "sizes",
            [
                "px-3 py-2 text-xs",
                "px-3 py-2 text-sm",
                "px-5 py-2.5 text-sm",
                "px-5 py-3 text-base",
                "px-6 py-3.5 text-base",
            ],
        )
        .classes("rounded", "rounded-lg")
        .classes("pill", "rounded-full")
        .classes("disabled", "cursor-not-allowed opacity-50")
        .table("group", |t| {
            t.classes("start", "rounded-s-lg")
                .classes("middle", "rounded-none")
                .classes("end", "rounded-e-lg")
        })
        .build()
}

/// Style table for the button family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A clickable button, or a link styled as one when `href` is given.
#[derive(Debug)]
pub struct Button {
    attrs: AttrMap,
    href: Option<String>,
    disabled: bool,
    pill: bool,
    content: Markup,
    attachment: Attachment,
}

impl Button {
    /// Recognized options: `color` (default `default`), `outline`, `size`
    /// (index, default 2), `pill`, `href`, `disabled`, `type` (default
    /// `button`), `remove_class`, and the attachment options. Everything
    /// else passes through.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let color = attrs.take_str("color");
        let color = validate(color.as_deref(), Some(COLORS), DEFAULT_COLOR);
        let outline = attrs.take_flag("outline", false);
        let size = attrs.take_int("size").unwrap_or(DEFAULT_SIZE as i64);
        let pill = attrs.take_flag("pill", false);
        let disabled = attrs.take_flag("disabled", false);
        let href = attrs.take_str("href");

        // Outline variants exist for a subset of colors; missing entries
        // fall back to the solid variant.
        let color_classes = if outline {
            styles.resolve(&["outline", color], styles.resolve(&["colors", color], ""))
        } else {
            styles.resolve(&["colors", color], "")
        };
        let shape = if pill { "pill" } else { "rounded" };
        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            Some(color_classes),
            Some(styles.size_class("sizes", size, DEFAULT_SIZE)),
            Some(styles.resolve(&[shape], "")),
            disabled.then(|| styles.resolve(&["disabled"], "")),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        let attachment = Attachment::take_from(&mut attrs, "button");
        class_list::apply_remove_option(&mut attrs);

        Self {
            attrs,
            href,
            disabled,
            pill,
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

    /// Set an attribute on the root element.
    #[must_use]
    pub fn attr(
        mut self,
        name: impl Into<String>,
        value: impl Into<fluxbit_core::attrs::AttrValue>,
    ) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub(crate) fn set_attr(
        &mut self,
        name: impl Into<String>,
        value: impl Into<fluxbit_core::attrs::AttrValue>,
    ) {
        self.attrs.set(name, value);
    }

    /// Swap the standalone rounding for group position classes. Called by
    /// the parent group during its `before_render`; pill buttons keep
    /// their shape.
    pub(crate) fn set_group_position(&mut self, position: GroupPosition) {
        if self.pill {
            return;
        }
        let styles = STYLES.load();
        let current = self.attrs.get_str("class").unwrap_or("").to_string();
        let stripped = class_list::remove(styles.resolve(&["rounded"], ""), &current);
        self.attrs.set("class", stripped);
        class_list::add(
            &mut self.attrs,
            styles.resolve(&["group", position.key()], ""),
            Position::Back,
        );
    }
}

impl Component for Button {
    fn before_render(&mut self) {
        self.attachment.wire(&mut self.attrs);
        if self.href.is_none() && !self.attrs.contains("type") {
            self.attrs.set("type", "button");
        }
        if self.disabled {
            self.attrs.set("disabled", true);
        }
    }

    fn render(&self) -> Markup {
        let tag = if self.href.is_some() { "a" } else { "button" };
        let mut el = Element::new(tag).with_attrs(self.attrs.clone());
        if let Some(href) = &self.href {
            el = el.attr("href", href.as_str());
        }
        let root = el.child(self.content.clone()).build();
        self.attachment.append_to(root)
    }
}
