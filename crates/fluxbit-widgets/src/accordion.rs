//! Accordion component.
//!
//! Panels are a repeated slot; each renders a heading with a toggle button
//! and a collapsible body. Header and body ids derive from the accordion's
//! own id (`<id>-header-<i>` / `<id>-body-<i>`) so the `data-accordion`
//! behavior layer can wire them without caller involvement.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list;
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::SlotList;
use fluxbit_style::{StyleScope, StyleTable};

use crate::icons;

fn defaults() -> StyleTable {
    StyleTable::builder()
        .table("button", |t| {
            t.classes(
                "default",
                "flex items-center justify-between w-full p-5 font-medium rtl:text-right \
                 text-gray-500 border border-gray-200 focus:ring-4 focus:ring-gray-200 \
                 hover:bg-gray-100 gap-3 dark:border-gray-700 dark:text-gray-400 \
                 dark:focus:ring-gray-800 dark:hover:bg-gray-800",
            )
            .classes(
                "flush",
                "flex items-center justify-between w-full py-5 font-medium rtl:text-right \
                 text-gray-500 border-b border-gray-200 gap-3 dark:border-gray-700 \
                 dark:text-gray-400",
            )
            .classes("first", "rounded-t-xl")
        })
        .table("body", |t| {
            t.classes(
                "default",
                "p-5 border border-t-0 border-gray-200 dark:border-gray-700",
            )
            .classes("flush", "py-5 border-b border-gray-200 dark:border-gray-700")
        })
        .classes("icon", "w-3 h-3 rotate-180 shrink-0")
        .build()
}

/// Style table for the accordion family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// One collapsible section of an [`Accordion`].
#[derive(Debug)]
pub struct AccordionPanel {
    header: Markup,
    body: Markup,
    open: bool,
}

impl AccordionPanel {
    /// Create a panel from header and body markup.
    pub fn new(header: Markup, body: Markup) -> Self {
        Self {
            header,
            body,
            open: false,
        }
    }

    /// Convenience constructor for text header and body.
    pub fn text(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Markup::text(header), Markup::text(body))
    }

    /// Render this panel expanded initially.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// A vertically stacked set of collapsible panels.
#[derive(Debug)]
pub struct Accordion {
    attrs: AttrMap,
    id: RandomId,
    flush: bool,
    always_open: bool,
    panels: SlotList<AccordionPanel>,
}

impl Accordion {
    /// Recognized options: `flush` (borderless variant), `always_open`
    /// (panels collapse independently), `remove_class`. A caller-supplied
    /// `id` wins over the generated one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let flush = attrs.take_flag("flush", false);
        let always_open = attrs.take_flag("always_open", false);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("accordion"),
            flush,
            always_open,
            panels: SlotList::new(),
        }
    }

    /// Append a panel. Insertion order is rendering order.
    #[must_use]
    pub fn add_panel(mut self, panel: AccordionPanel) -> Self {
        self.panels.push(panel);
        self
    }

    fn render_panel(&self, accordion_id: &str, index: usize, panel: &AccordionPanel) -> Markup {
        let styles = STYLES.load();
        let header_id = format!("{accordion_id}-header-{index}");
        let body_id = format!("{accordion_id}-body-{index}");
        let variant = if self.flush { "flush" } else { "default" };

        let button_classes = class_list::join([
            Some(styles.resolve(&["button", variant], "")),
            (!self.flush && index == 0).then(|| styles.resolve(&["button", "first"], "")),
        ]);
        let button = Element::new("button")
            .attr("type", "button")
            .class(button_classes)
            .attr("data-accordion-target", format!("#{body_id}"))
            .attr("aria-expanded", if panel.open { "true" } else { "false" })
            .attr("aria-controls", body_id.as_str())
            .child(Element::new("span").child(panel.header.clone()).build())
            .child(icons::chevron_down(
                AttrMap::new()
                    .with_flag("data-accordion-icon")
                    .with("class", styles.resolve(&["icon"], "")),
            ))
            .build();

        let heading = Element::new("h2")
            .attr("id", header_id.as_str())
            .child(button)
            .build();
        let mut body = Element::new("div").attr("id", body_id.as_str());
        if !panel.open {
            body = body.class("hidden");
        }
        let body = body
            .attr("aria-labelledby", header_id.as_str())
            .child(
                Element::new("div")
                    .class(styles.resolve(&["body", variant], ""))
                    .child(panel.body.clone())
                    .build(),
            )
            .build();
        Markup::Fragment(vec![heading, body])
    }
}

impl Component for Accordion {
    fn before_render(&mut self) {
        ensure_id(&mut self.attrs, &self.id);
        let mode = if self.always_open { "open" } else { "collapse" };
        self.attrs.set("data-accordion", mode);
    }

    fn render(&self) -> Markup {
        let accordion_id = self.attrs.get_str("id").unwrap_or("").to_string();
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .children(
                self.panels
                    .iter()
                    .enumerate()
                    .map(|(index, panel)| self.render_panel(&accordion_id, index, panel)),
            )
            .build()
    }
}
