//! Dropdown component.
//!
//! The trigger is a single slot holding a typed [`Button`]; during
//! `before_render` the dropdown wires `data-dropdown-toggle` (and the
//! placement, when not the default) onto it, pointing at the generated
//! menu id. Entries are a repeated slot of items, dividers, and headers.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::{Slot, SlotList};
use fluxbit_style::{StyleScope, StyleTable, validate};

use crate::base::PLACEMENTS;
use crate::button::Button;

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "z-10 hidden bg-white divide-y divide-gray-100 rounded-lg shadow-sm w-44 \
             dark:bg-gray-700",
        )
        .classes("list", "py-2 text-sm text-gray-700 dark:text-gray-200")
        .classes(
            "item",
            "block px-4 py-2 hover:bg-gray-100 dark:hover:bg-gray-600 dark:hover:text-white",
        )
        .classes(
            "header",
            "px-4 py-3 text-sm text-gray-900 dark:text-white",
        )
        .build()
}

/// Style table for the dropdown family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// One entry of a dropdown menu.
#[derive(Debug)]
pub enum DropdownEntry {
    /// A selectable item; renders an anchor when `href` is given.
    Item {
        /// Item content.
        label: Markup,
        /// Optional link target.
        href: Option<String>,
        /// Extra attributes on the item element.
        attrs: AttrMap,
    },
    /// A separator; starts a new list section.
    Divider,
    /// Non-interactive header content above the following section.
    Header(Markup),
}

/// A toggleable menu anchored to a trigger button.
#[derive(Debug)]
pub struct Dropdown {
    attrs: AttrMap,
    id: RandomId,
    placement: String,
    trigger: Slot<Button>,
    entries: SlotList<DropdownEntry>,
}

impl Dropdown {
    /// Recognized options: `placement` (default `bottom`), `remove_class`.
    /// A caller-supplied `id` wins over the generated one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let placement = attrs.take_str("placement");
        let placement = validate(placement.as_deref(), Some(PLACEMENTS), "bottom").to_string();
        class_list::add(&mut attrs, styles.resolve(&["base"], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("dropdown"),
            placement,
            trigger: Slot::new(),
            entries: SlotList::new(),
        }
    }

    /// Set the trigger button. Last write wins.
    #[must_use]
    pub fn with_trigger(mut self, button: Button) -> Self {
        self.trigger.set(button);
        self
    }

    /// Append a text item.
    #[must_use]
    pub fn add_item(self, label: impl Into<String>, href: Option<&str>) -> Self {
        self.add_entry(DropdownEntry::Item {
            label: Markup::text(label),
            href: href.map(str::to_string),
            attrs: AttrMap::new(),
        })
    }

    /// Append an arbitrary entry.
    #[must_use]
    pub fn add_entry(mut self, entry: DropdownEntry) -> Self {
        self.entries.push(entry);
        self
    }

    fn render_menu(&self) -> Markup {
        let styles = STYLES.load();
        let mut sections: Vec<Markup> = Vec::new();
        let mut current: Vec<Markup> = Vec::new();
        for entry in &self.entries {
            match entry {
                DropdownEntry::Item { label, href, attrs } => {
                    let tag = if href.is_some() { "a" } else { "button" };
                    let mut item_attrs = attrs.clone();
                    class_list::add(
                        &mut item_attrs,
                        styles.resolve(&["item"], ""),
                        Position::Front,
                    );
                    let mut item = Element::new(tag).with_attrs(item_attrs);
                    match href {
                        Some(href) => item = item.attr("href", href.as_str()),
                        None => item = item.attr("type", "button"),
                    }
                    current.push(
                        Element::new("li").child(item.child(label.clone()).build()).build(),
                    );
                }
                DropdownEntry::Divider => {
                    flush_section(&mut sections, &mut current, &styles.resolve(&["list"], ""));
                }
                DropdownEntry::Header(content) => {
                    flush_section(&mut sections, &mut current, &styles.resolve(&["list"], ""));
                    sections.push(
                        Element::new("div")
                            .class(styles.resolve(&["header"], ""))
                            .child(content.clone())
                            .build(),
                    );
                }
            }
        }
        flush_section(&mut sections, &mut current, &styles.resolve(&["list"], ""));
        Element::new("div")
            .with_attrs(self.attrs.clone())
            .children(sections)
            .build()
    }
}

fn flush_section(sections: &mut Vec<Markup>, current: &mut Vec<Markup>, list_classes: &str) {
    if current.is_empty() {
        return;
    }
    sections.push(
        Element::new("ul")
            .class(list_classes)
            .children(current.drain(..))
            .build(),
    );
}

impl Component for Dropdown {
    fn before_render(&mut self) {
        let menu_id = ensure_id(&mut self.attrs, &self.id);
        let placement = self.placement.clone();
        if let Some(button) = self.trigger.get_mut() {
            button.set_attr("data-dropdown-toggle", menu_id);
            if placement != "bottom" {
                button.set_attr("data-dropdown-placement", placement);
            }
            button.before_render();
        }
    }

    fn render(&self) -> Markup {
        let menu = self.render_menu();
        match self.trigger.get() {
            Some(button) => Markup::Fragment(vec![button.render(), menu]),
            None => menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxbit_core::component::render_to_string;

    #[test]
    fn trigger_points_at_menu_id() {
        let mut dropdown = Dropdown::new(AttrMap::new().with("id", "menu"))
            .with_trigger(Button::new(AttrMap::new()).text("Open"))
            .add_item("Settings", Some("/settings"));
        let html = render_to_string(&mut dropdown);
        assert!(html.contains("data-dropdown-toggle=\"menu\""));
        assert!(html.contains("id=\"menu\""));
        let trigger = html.find("Open").unwrap();
        let menu = html.find("id=\"menu\"").unwrap();
        assert!(trigger < menu);
    }

    #[test]
    fn generated_id_is_shared() {
        let mut dropdown = Dropdown::new(AttrMap::new())
            .with_trigger(Button::new(AttrMap::new()));
        let html = render_to_string(&mut dropdown);
        let marker = "data-dropdown-toggle=\"";
        let toggle_start = html.find(marker).unwrap() + marker.len();
        let id = &html[toggle_start..];
        let id = &id[..id.find('"').unwrap()];
        assert!(id.starts_with("dropdown-"));
        assert!(html.contains(&format!("id=\"{id}\"")));
    }

    #[test]
    fn items_render_in_order_within_a_list() {
        let mut dropdown = Dropdown::new(AttrMap::new())
            .add_item("First", Some("/a"))
            .add_item("Second", None);
        let html = render_to_string(&mut dropdown);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
        assert!(html.contains("<a "));
        assert!(html.contains("type=\"button\""));
        assert_eq!(html.matches("<ul").count(), 1);
    }

    #[test]
    fn divider_splits_lists() {
        let mut dropdown = Dropdown::new(AttrMap::new())
            .add_item("A", None)
            .add_entry(DropdownEntry::Divider)
            .add_item("B", None);
        let html = render_to_string(&mut dropdown);
        assert_eq!(html.matches("<ul").count(), 2);
    }

    #[test]
    fn header_renders_outside_lists() {
        let mut dropdown = Dropdown::new(AttrMap::new())
            .add_entry(DropdownEntry::Header(Markup::text("Account")))
            .add_item("Sign out", None);
        let html = render_to_string(&mut dropdown);
        let header = html.find("Account").unwrap();
        let list = html.find("<ul").unwrap();
        assert!(header < list);
    }

    #[test]
    fn non_default_placement_rides_on_trigger() {
        let mut dropdown = Dropdown::new(AttrMap::new().with("placement", "right"))
            .with_trigger(Button::new(AttrMap::new()));
        let html = render_to_string(&mut dropdown);
        assert!(html.contains("data-dropdown-placement=\"right\""));
    }

    #[test]
    fn invalid_placement_degrades_to_bottom() {
        let mut dropdown = Dropdown::new(AttrMap::new().with("placement", "diagonal"))
            .with_trigger(Button::new(AttrMap::new()));
        let html = render_to_string(&mut dropdown);
        assert!(!html.contains("data-dropdown-placement"));
    }

    #[test]
    fn trigger_reassignment_last_write_wins() {
        let mut dropdown = Dropdown::new(AttrMap::new())
            .with_trigger(Button::new(AttrMap::new()).text("first"))
            .with_trigger(Button::new(AttrMap::new()).text("second"));
        let html = render_to_string(&mut dropdown);
        assert!(html.contains("second"));
        assert!(!html.contains("first"));
    }
}
