//! Popover component.
//!
//! A richer floating panel than [`crate::tooltip::Tooltip`]: optional
//! title bar, body content, arrow. The trigger references it via
//! `data-popover-target`; placement and trigger mode ride along as
//! `data-popover-*` attributes emitted by [`crate::base::Attachment`].

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::Slot;
use fluxbit_style::{StyleScope, StyleTable};

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "absolute z-10 invisible inline-block w-64 text-sm text-gray-500 transition-opacity \
             duration-300 bg-white border border-gray-200 rounded-lg shadow-xs opacity-0 \
             dark:text-gray-400 dark:border-gray-600 dark:bg-gray-800",
        )
        .classes(
            "title",
            "px-3 py-2 bg-gray-100 border-b border-gray-200 rounded-t-lg dark:border-gray-600 \
             dark:bg-gray-700",
        )
        .classes("heading", "font-semibold text-gray-900 dark:text-white")
        .classes("body", "px-3 py-2")
        .build()
}

/// Style table for the popover family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A floating popover panel with an optional title bar.
#[derive(Debug)]
pub struct Popover {
    attrs: AttrMap,
    id: RandomId,
    arrow: bool,
    title: Slot<Markup>,
    content: Markup,
}

impl Popover {
    /// Recognized options: `arrow` (default true), `title` (shorthand for
    /// [`Popover::title`]). A caller-supplied `id` wins over the generated
    /// one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let arrow = attrs.take_flag("arrow", true);
        let mut title = Slot::new();
        if let Some(text) = attrs.take_str("title") {
            title.set(Markup::text(text));
        }
        class_list::add(&mut attrs, styles.resolve(&["base"], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("popover"),
            arrow,
            title,
            content: Markup::Empty,
        }
    }

    /// Set the title. Last write wins.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title.set(Markup::text(title));
        self
    }

    /// Set arbitrary title markup. Last write wins.
    #[must_use]
    pub fn title_markup(mut self, title: Markup) -> Self {
        self.title.set(title);
        self
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

    /// The id the trigger should reference.
    pub fn target_id(&mut self) -> String {
        ensure_id(&mut self.attrs, &self.id)
    }
}

impl Component for Popover {
    fn before_render(&mut self) {
        ensure_id(&mut self.attrs, &self.id);
        self.attrs.set("data-popover", true);
        self.attrs.set("role", "tooltip");
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let title = match self.title.get() {
            Some(markup) => Element::new("div")
                .class(styles.resolve(&["title"], ""))
                .child(
                    Element::new("h3")
                        .class(styles.resolve(&["heading"], ""))
                        .child(markup.clone())
                        .build(),
                )
                .build(),
            None => Markup::Empty,
        };
        let body = Element::new("div")
            .class(styles.resolve(&["body"], ""))
            .child(self.content.clone())
            .build();
        let arrow = if self.arrow {
            Element::new("div").attr("data-popper-arrow", true).build()
        } else {
            Markup::Empty
        };
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .child(title)
            .child(body)
            .child(arrow)
            .build()
    }
}
