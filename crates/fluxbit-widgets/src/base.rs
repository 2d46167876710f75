//! Shared widget behavior: tooltip/popover attachment.
//!
//! Any widget that accepts `tooltip_text`/`popover_text` options owns an
//! [`Attachment`]. Construction consumes the options; the widget's
//! `before_render` calls [`Attachment::wire`] to mutate its root bag
//! (`data-tooltip-target`, `data-popover-target`, placement and trigger
//! attributes), and `render` calls [`Attachment::append_to`] so the
//! rendered affordance follows the root element's own markup. Wiring runs
//! in `before_render` rather than construction so slot content is already
//! known when the attributes are decided.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::component::render_component;
use fluxbit_core::id::RandomId;
use fluxbit_core::markup::Markup;
use fluxbit_style::validate;

use crate::popover::Popover;
use crate::tooltip::Tooltip;

/// Placements shared by tooltips, popovers, and dropdown menus.
pub const PLACEMENTS: &[&str] = &["top", "right", "bottom", "left"];

const TRIGGERS: &[&str] = &["hover", "click", "none"];

/// Tooltip/popover options lifted off a widget's option bag.
#[derive(Debug)]
pub struct Attachment {
    tooltip_text: Option<String>,
    tooltip_placement: String,
    tooltip_trigger: String,
    tooltip_id: RandomId,
    popover_text: Option<String>,
    popover_title: Option<String>,
    popover_placement: String,
    popover_trigger: String,
    popover_id: RandomId,
}

impl Attachment {
    /// Consume attachment options from the bag. `prefix` seeds the shared
    /// target ids, typically the owning widget's name.
    pub fn take_from(attrs: &mut AttrMap, prefix: &str) -> Self {
        let tooltip_text = attrs.take_str("tooltip_text");
        let placement = attrs.take_str("tooltip_placement");
        let tooltip_placement =
            validate(placement.as_deref(), Some(PLACEMENTS), "top").to_string();
        let trigger = attrs.take_str("tooltip_trigger");
        let tooltip_trigger = validate(trigger.as_deref(), Some(TRIGGERS), "hover").to_string();

        let popover_text = attrs.take_str("popover_text");
        let popover_title = attrs.take_str("popover_title");
        let placement = attrs.take_str("popover_placement");
        let popover_placement =
            validate(placement.as_deref(), Some(PLACEMENTS), "top").to_string();
        let trigger = attrs.take_str("popover_trigger");
        let popover_trigger = validate(trigger.as_deref(), Some(TRIGGERS), "hover").to_string();

        Self {
            tooltip_text,
            tooltip_placement,
            tooltip_trigger,
            tooltip_id: RandomId::new(format!("{prefix}-tooltip")),
            popover_text,
            popover_title,
            popover_placement,
            popover_trigger,
            popover_id: RandomId::new(format!("{prefix}-popover")),
        }
    }

    /// Whether any affordance was requested.
    pub fn is_attached(&self) -> bool {
        self.tooltip_text.is_some() || self.popover_text.is_some()
    }

    /// Wire `data-*` trigger attributes onto the root bag. Called from the
    /// owning widget's `before_render`.
    pub fn wire(&self, attrs: &mut AttrMap) {
        if self.tooltip_text.is_some() {
            attrs.set("data-tooltip-target", self.tooltip_id.get());
            attrs.set("data-tooltip-placement", self.tooltip_placement.as_str());
            if self.tooltip_trigger != "hover" {
                attrs.set("data-tooltip-trigger", self.tooltip_trigger.as_str());
            }
        }
        if self.popover_text.is_some() {
            attrs.set("data-popover-target", self.popover_id.get());
            attrs.set("data-popover-placement", self.popover_placement.as_str());
            if self.popover_trigger != "hover" {
                attrs.set("data-popover-trigger", self.popover_trigger.as_str());
            }
        }
    }

    /// The rendered affordances, or [`Markup::Empty`] when none were
    /// requested.
    pub fn render_after(&self) -> Markup {
        let mut after = Vec::new();
        if let Some(text) = &self.tooltip_text {
            let mut tooltip = Tooltip::new(AttrMap::new().with("id", self.tooltip_id.get()))
                .text(text.clone());
            after.push(render_component(&mut tooltip));
        }
        if let Some(text) = &self.popover_text {
            let mut popover = Popover::new(AttrMap::new().with("id", self.popover_id.get()))
                .text(text.clone());
            if let Some(title) = &self.popover_title {
                popover = popover.title(title.clone());
            }
            after.push(render_component(&mut popover));
        }
        if after.is_empty() {
            Markup::Empty
        } else {
            Markup::Fragment(after)
        }
    }

    /// Append the rendered affordances after the root markup.
    pub fn append_to(&self, root: Markup) -> Markup {
        let after = self.render_after();
        if after.is_empty() {
            root
        } else {
            Markup::Fragment(vec![root, after])
        }
    }
}
