//! Timeline component.
//!
//! Items are a repeated slot. The trailing margin that visually continues
//! the connector line is suppressed on the last item, a decision that is
//! only possible once the slot is fully materialized.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::SlotList;
use fluxbit_style::{StyleScope, StyleTable};

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "relative border-s border-gray-200 dark:border-gray-700")
        .classes("horizontal", "items-center sm:flex")
        .classes("item", "ms-4")
        .classes("item_spacing", "mb-10")
        .classes("item_horizontal", "relative mb-6 sm:mb-0")
        .classes(
            "dot",
            "absolute w-3 h-3 bg-gray-200 rounded-full mt-1.5 -start-1.5 border border-white \
             dark:border-gray-900 dark:bg-gray-700",
        )
        .classes(
            "time",
            "mb-1 text-sm font-normal leading-none text-gray-400 dark:text-gray-500",
        )
        .classes("title", "text-lg font-semibold text-gray-900 dark:text-white")
        .classes("body", "text-base font-normal text-gray-500 dark:text-gray-400")
        .build()
}

/// Style table for the timeline family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// One event on a [`Timeline`].
#[derive(Debug)]
pub struct TimelineItem {
    time: Option<String>,
    title: Markup,
    body: Markup,
}

impl TimelineItem {
    /// Create an item from title and body markup.
    pub fn new(title: Markup, body: Markup) -> Self {
        Self {
            time: None,
            title,
            body,
        }
    }

    /// Convenience constructor for text title and body.
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Markup::text(title), Markup::text(body))
    }

    /// Set the timestamp label.
    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }
}

/// An ordered list of events along a connector line.
#[derive(Debug)]
pub struct Timeline {
    attrs: AttrMap,
    horizontal: bool,
    items: SlotList<TimelineItem>,
}

impl Timeline {
    /// Recognized options: `horizontal`, `remove_class`. Everything else
    /// passes through to the `ol` element.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let horizontal = attrs.take_flag("horizontal", false);
        let base = if horizontal { "horizontal" } else { "base" };
        class_list::add(&mut attrs, styles.resolve(&[base], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            horizontal,
            items: SlotList::new(),
        }
    }

    /// Append an item. Insertion order is rendering order.
    #[must_use]
    pub fn add_item(mut self, item: TimelineItem) -> Self {
        self.items.push(item);
        self
    }

    fn render_item(&self, item: &TimelineItem, is_last: bool) -> Markup {
        let styles = STYLES.load();
        let item_classes = if self.horizontal {
            styles.resolve(&["item_horizontal"], "").to_string()
        } else {
            class_list::join([
                Some(styles.resolve(&["item"], "")),
                (!is_last).then(|| styles.resolve(&["item_spacing"], "")),
            ])
        };
        let time = match &item.time {
            Some(time) => Element::new("time")
                .class(styles.resolve(&["time"], ""))
                .text(time.clone())
                .build(),
            None => Markup::Empty,
        };
        Element::new("li")
            .class(item_classes)
            .child(Element::new("div").class(styles.resolve(&["dot"], "")).build())
            .child(time)
            .child(
                Element::new("h3")
                    .class(styles.resolve(&["title"], ""))
                    .child(item.title.clone())
                    .build(),
            )
            .child(
                Element::new("p")
                    .class(styles.resolve(&["body"], ""))
                    .child(item.body.clone())
                    .build(),
            )
            .build()
    }
}

impl Component for Timeline {
    fn render(&self) -> Markup {
        let count = self.items.len();
        Element::new("ol")
            .with_attrs(self.attrs.clone())
            .children(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.render_item(item, index + 1 == count)),
            )
            .build()
    }
}
