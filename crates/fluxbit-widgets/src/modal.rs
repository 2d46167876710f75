//! Modal component.
//!
//! Header and footer are single slots (last write wins); body content is a
//! repeated slot. The close button targets the modal's own id via
//! `data-modal-hide`, so an id is ensured during `before_render` once the
//! header slot is known.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::{Slot, SlotList};
use fluxbit_style::{StyleScope, StyleTable, validate};

use crate::icons;

/// Supported modal placements.
pub const PLACEMENTS: &[&str] = &[
    "top-left",
    "top-center",
    "top-right",
    "center-left",
    "center",
    "center-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

const DEFAULT_PLACEMENT: &str = "center";
const DEFAULT_SIZE: usize = 3;

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "hidden overflow-y-auto overflow-x-hidden fixed top-0 right-0 left-0 z-50 w-full \
             md:inset-0 h-[calc(100%-1rem)] max-h-full",
        )
        .classes("wrapper", "relative p-4 w-full max-h-full")
        .table("placements", |t| {
            t.classes("top-left", "justify-start items-start")
                .classes("top-center", "justify-center items-start")
                .classes("top-right", "justify-end items-start")
                .classes("center-left", "justify-start items-center")
                .classes("center", "justify-center items-center")
                .classes("center-right", "justify-end items-center")
                .classes("bottom-left", "justify-start items-end")
                .classes("bottom-center", "justify-center items-end")
                .classes("bottom-right", "justify-end items-end")
        })
        .list(
            "sizes",
            ["max-w-md", "max-w-lg", "max-w-xl", "max-w-2xl", "max-w-4xl", "max-w-7xl"],
        )
        .classes("panel", "relative bg-white rounded-lg shadow-sm dark:bg-gray-700")
        .classes(
            "header",
            "flex items-center justify-between p-4 md:p-5 border-b rounded-t \
             dark:border-gray-600 border-gray-200",
        )
        .classes("title", "text-xl font-semibold text-gray-900 dark:text-white")
        .classes(
            "close",
            "text-gray-400 bg-transparent hover:bg-gray-200 hover:text-gray-900 rounded-lg \
             text-sm w-8 h-8 ms-auto inline-flex justify-center items-center \
             dark:hover:bg-gray-600 dark:hover:text-white",
        )
        .classes("close_icon", "w-3 h-3")
        .classes("body", "p-4 md:p-5 space-y-4")
        .classes(
            "footer",
            "flex items-center p-4 md:p-5 border-t border-gray-200 rounded-b \
             dark:border-gray-600",
        )
        .build()
}

/// Style table for the modal family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A dialog overlay toggled by the behavior layer.
#[derive(Debug)]
pub struct Modal {
    attrs: AttrMap,
    id: RandomId,
    size: i64,
    close_button: bool,
    static_backdrop: bool,
    header: Slot<Markup>,
    body: SlotList<Markup>,
    footer: Slot<Markup>,
}

impl Modal {
    /// Recognized options: `size` (index, default 3), `placement` (default
    /// `center`), `close_button` (default true), `static_backdrop`,
    /// `remove_class`. A caller-supplied `id` wins over the generated one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let size = attrs.take_int("size").unwrap_or(DEFAULT_SIZE as i64);
        let placement = attrs.take_str("placement");
        let placement = validate(placement.as_deref(), Some(PLACEMENTS), DEFAULT_PLACEMENT);
        let close_button = attrs.take_flag("close_button", true);
        let static_backdrop = attrs.take_flag("static_backdrop", false);
        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            Some(styles.resolve(&["placements", placement], "")),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("modal"),
            size,
            close_button,
            static_backdrop,
            header: Slot::new(),
            body: SlotList::new(),
            footer: Slot::new(),
        }
    }

    /// Set the header title. Last write wins.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header.set(Markup::text(header));
        self
    }

    /// Set arbitrary header markup. Last write wins.
    #[must_use]
    pub fn with_header_markup(mut self, header: Markup) -> Self {
        self.header.set(header);
        self
    }

    /// Append body content. Insertion order is rendering order.
    #[must_use]
    pub fn add_content(mut self, content: Markup) -> Self {
        self.body.push(content);
        self
    }

    /// Set the footer markup. Last write wins.
    #[must_use]
    pub fn with_footer(mut self, footer: Markup) -> Self {
        self.footer.set(footer);
        self
    }

    fn render_close_button(&self, styles: &StyleTable) -> Markup {
        let target = self.attrs.get_str("id").unwrap_or("");
        Element::new("button")
            .attr("type", "button")
            .class(styles.resolve(&["close"], ""))
            .attr("data-modal-hide", target)
            .child(icons::close(
                AttrMap::new().with("class", styles.resolve(&["close_icon"], "")),
            ))
            .child(
                Element::new("span")
                    .class("sr-only")
                    .text(fluxbit_i18n::label("close"))
                    .build(),
            )
            .build()
    }
}

impl Component for Modal {
    fn before_render(&mut self) {
        ensure_id(&mut self.attrs, &self.id);
        self.attrs.set("tabindex", -1);
        self.attrs.set("aria-hidden", "true");
        if self.static_backdrop {
            self.attrs.set("data-modal-backdrop", "static");
        }
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();

        let header = match self.header.get() {
            Some(title) => {
                let mut el = Element::new("div").class(styles.resolve(&["header"], "")).child(
                    Element::new("h3")
                        .class(styles.resolve(&["title"], ""))
                        .child(title.clone())
                        .build(),
                );
                if self.close_button {
                    el = el.child(self.render_close_button(&styles));
                }
                el.build()
            }
            None => Markup::Empty,
        };
        let body = Element::new("div")
            .class(styles.resolve(&["body"], ""))
            .children(self.body.iter().cloned())
            .build();
        let footer = match self.footer.get() {
            Some(content) => Element::new("div")
                .class(styles.resolve(&["footer"], ""))
                .child(content.clone())
                .build(),
            None => Markup::Empty,
        };

        let wrapper_classes = class_list::join([
            Some(styles.resolve(&["wrapper"], "")),
            Some(styles.size_class("sizes", self.size, DEFAULT_SIZE)),
        ]);
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .child(
                Element::new("div")
                    .class(wrapper_classes)
                    .child(
                        Element::new("div")
                            .class(styles.resolve(&["panel"], ""))
                            .child(header)
                            .child(body)
                            .child(footer)
                            .build(),
                    )
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxbit_core::component::render_to_string;

    #[test]
    fn renders_hidden_overlay_with_generated_id() {
        let mut modal = Modal::new(AttrMap::new()).add_content(Markup::text("body"));
        let html = render_to_string(&mut modal);
        assert!(html.contains("id=\"modal-"));
        assert!(html.contains("tabindex=\"-1\""));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("body"));
    }

    #[test]
    fn header_close_button_targets_modal_id() {
        let mut modal = Modal::new(AttrMap::new().with("id", "confirm"))
            .with_header("Are you sure?");
        let html = render_to_string(&mut modal);
        assert!(html.contains("data-modal-hide=\"confirm\""));
        assert!(html.contains("Are you sure?"));
        assert!(html.contains(">Close</span>"));
    }

    #[test]
    fn close_button_can_be_disabled() {
        let mut modal = Modal::new(AttrMap::new().with("close_button", false))
            .with_header("Title");
        assert!(!render_to_string(&mut modal).contains("data-modal-hide"));
    }

    #[test]
    fn no_header_slot_no_header_section() {
        let mut modal = Modal::new(AttrMap::new());
        assert!(!render_to_string(&mut modal).contains("<h3"));
    }

    #[test]
    fn header_reassignment_last_write_wins() {
        let mut modal = Modal::new(AttrMap::new())
            .with_header("first")
            .with_header("second");
        let html = render_to_string(&mut modal);
        assert!(html.contains("second"));
        assert!(!html.contains("first"));
    }

    #[test]
    fn size_index_selects_width() {
        let mut modal = Modal::new(AttrMap::new().with("size", 0));
        assert!(render_to_string(&mut modal).contains("max-w-md"));
        let mut oversized = Modal::new(AttrMap::new().with("size", 99));
        assert!(render_to_string(&mut oversized).contains("max-w-7xl"));
    }

    #[test]
    fn placement_selects_alignment_classes() {
        let mut modal = Modal::new(AttrMap::new().with("placement", "top-right"));
        assert!(render_to_string(&mut modal).contains("justify-end items-start"));
    }

    #[test]
    fn unknown_placement_degrades_to_center() {
        let mut modal = Modal::new(AttrMap::new().with("placement", "everywhere"));
        assert!(render_to_string(&mut modal).contains("justify-center items-center"));
    }

    #[test]
    fn static_backdrop_emits_data_attribute() {
        let mut modal = Modal::new(AttrMap::new().with("static_backdrop", true));
        assert!(render_to_string(&mut modal).contains("data-modal-backdrop=\"static\""));
    }

    #[test]
    fn footer_renders_after_body() {
        let mut modal = Modal::new(AttrMap::new())
            .add_content(Markup::text("the body"))
            .with_footer(Markup::text("the footer"));
        let html = render_to_string(&mut modal);
        assert!(html.find("the body").unwrap() < html.find("the footer").unwrap());
    }
}
