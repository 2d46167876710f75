//! Tooltip component.
//!
//! Renders the floating `role="tooltip"` node the behavior layer shows and
//! hides. The trigger element points at it via `data-tooltip-target`; see
//! [`crate::base::Attachment`] for the wiring side.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable};

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "absolute z-10 invisible inline-block px-3 py-2 text-sm font-medium text-white \
             transition-opacity duration-300 bg-gray-900 rounded-lg shadow-xs opacity-0 tooltip \
             dark:bg-gray-700",
        )
        .classes("arrow", "tooltip-arrow")
        .build()
}

/// Style table for the tooltip family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A floating tooltip panel.
#[derive(Debug)]
pub struct Tooltip {
    attrs: AttrMap,
    id: RandomId,
    arrow: bool,
    content: Markup,
}

impl Tooltip {
    /// Recognized options: `arrow` (default true). A caller-supplied `id`
    /// wins over the generated one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let arrow = attrs.take_flag("arrow", true);
        class_list::add(&mut attrs, styles.resolve(&["base"], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("tooltip"),
            arrow,
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

    /// The id the trigger should reference.
    pub fn target_id(&mut self) -> String {
        ensure_id(&mut self.attrs, &self.id)
    }
}

impl Component for Tooltip {
    fn before_render(&mut self) {
        ensure_id(&mut self.attrs, &self.id);
        self.attrs.set("role", "tooltip");
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let arrow = if self.arrow {
            Element::new("div")
                .class(styles.resolve(&["arrow"], ""))
                .attr("data-popper-arrow", true)
                .build()
        } else {
            Markup::Empty
        };
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .child(self.content.clone())
            .child(arrow)
            .build()
    }
}
