//! Button group component.
//!
//! Wraps a repeated slot of [`Button`]s and injects position classes
//! (start/middle/end rounding) into each child during `before_render`,
//! once the full slot list is known. Children are unaware they are
//! grouped; the parent cascades the context.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::SlotList;
use fluxbit_style::{StyleScope, StyleTable};

use crate::button::{Button, GroupPosition};

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "inline-flex rounded-md shadow-xs")
        .build()
}

/// Style table for the button group family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A horizontal run of attached buttons.
#[derive(Debug)]
pub struct ButtonGroup {
    attrs: AttrMap,
    buttons: SlotList<Button>,
}

impl ButtonGroup {
    /// Recognized options: `remove_class`. Everything else passes through.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        class_list::add(&mut attrs, styles.resolve(&["base"], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            buttons: SlotList::new(),
        }
    }

    /// Append a button. Insertion order is rendering order.
    #[must_use]
    pub fn add_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Component for ButtonGroup {
    fn before_render(&mut self) {
        self.attrs.set("role", "group");
        let count = self.buttons.len();
        for (index, button) in self.buttons.iter_mut().enumerate() {
            // A lone button keeps its standalone rounding.
            if count > 1 {
                let position = if index == 0 {
                    GroupPosition::Start
                } else if index == count - 1 {
                    GroupPosition::End
                } else {
                    GroupPosition::Middle
                };
                button.set_group_position(position);
            }
            button.before_render();
        }
    }

    fn render(&self) -> Markup {
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .children(self.buttons.iter().map(|button| button.render()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxbit_core::component::render_to_string;

    fn button(label: &str) -> Button {
        Button::new(AttrMap::new()).text(label)
    }

    #[test]
    fn three_buttons_get_start_middle_end() {
        let mut group = ButtonGroup::new(AttrMap::new())
            .add_button(button("a"))
            .add_button(button("b"))
            .add_button(button("c"));
        let html = render_to_string(&mut group);
        let a = html.find("rounded-s-lg").unwrap();
        let b = html.find("rounded-none").unwrap();
        let c = html.find("rounded-e-lg").unwrap();
        assert!(a < b && b < c);
        assert!(html.contains("role=\"group\""));
    }

    #[test]
    fn buttons_render_in_insertion_order() {
        let mut group = ButtonGroup::new(AttrMap::new())
            .add_button(button("first"))
            .add_button(button("second"));
        let html = render_to_string(&mut group);
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn single_button_keeps_standalone_rounding() {
        let mut group = ButtonGroup::new(AttrMap::new()).add_button(button("only"));
        let html = render_to_string(&mut group);
        assert!(html.contains("rounded-lg"));
        assert!(!html.contains("rounded-s-lg"));
    }

    #[test]
    fn empty_group_renders_wrapper_only() {
        let mut group = ButtonGroup::new(AttrMap::new());
        let html = render_to_string(&mut group);
        assert!(html.contains("role=\"group\""));
        assert!(!html.contains("<button"));
    }
}
