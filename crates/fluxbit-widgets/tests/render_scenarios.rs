//! End-to-end rendering scenarios across the widget set.
//!
//! These exercise the full pipeline: option-bag consumption, style
//! resolution with fallback, class composition and removal, id wiring,
//! slot ordering, and attribute pass-through, asserting on the final HTML.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::component::render_to_string;
use fluxbit_core::markup::Markup;
use fluxbit_widgets::{
    Accordion, AccordionPanel, Badge, Button, ButtonGroup, Progress, Tab, Tabs,
};

fn class_attr(html: &str) -> Vec<String> {
    let start = html.find("class=\"").expect("no class attribute") + 7;
    let rest = &html[start..];
    let end = rest.find('"').expect("unterminated class attribute");
    rest[..end].split_whitespace().map(str::to_string).collect()
}

#[test]
fn badge_with_unknown_color_renders_the_info_default() {
    let mut badge = Badge::new(AttrMap::new().with("color", "nonexistent")).text("hi");
    let html = render_to_string(&mut badge);
    let classes = class_attr(&html);
    assert!(classes.iter().any(|c| c == "bg-blue-100"));
    assert!(!classes.iter().any(|c| c.contains("nonexistent")));

    // Identical to an explicitly defaulted badge's classes.
    let mut defaulted = Badge::new(AttrMap::new().with("color", "info")).text("hi");
    assert_eq!(class_attr(&render_to_string(&mut defaulted)), classes);
}

#[test]
fn accordion_panels_get_distinct_indexed_header_ids() {
    let mut accordion = Accordion::new(AttrMap::new())
        .add_panel(AccordionPanel::text("One", "first"))
        .add_panel(AccordionPanel::text("Two", "second"));
    let html = render_to_string(&mut accordion);

    let id_start = html.find("id=\"").unwrap() + 4;
    let accordion_id = &html[id_start..];
    let accordion_id = &accordion_id[..accordion_id.find('"').unwrap()];

    let header_0 = format!("id=\"{accordion_id}-header-0\"");
    let header_1 = format!("id=\"{accordion_id}-header-1\"");
    assert!(html.contains(&header_0));
    assert!(html.contains(&header_1));
    assert_ne!(header_0, header_1);
}

#[test]
fn button_group_positions_start_middle_end() {
    let mut group = ButtonGroup::new(AttrMap::new())
        .add_button(Button::new(AttrMap::new()).text("one"))
        .add_button(Button::new(AttrMap::new()).text("two"))
        .add_button(Button::new(AttrMap::new()).text("three"));
    let html = render_to_string(&mut group);

    let buttons: Vec<&str> = html.split("<button").skip(1).collect();
    assert_eq!(buttons.len(), 3);
    assert!(buttons[0].contains("rounded-s-lg"));
    assert!(!buttons[0].contains("rounded-e-lg"));
    assert!(buttons[1].contains("rounded-none"));
    assert!(buttons[2].contains("rounded-e-lg"));
    assert!(!buttons[2].contains("rounded-s-lg"));
}

#[test]
fn remove_class_deletes_exact_tokens_only() {
    let mut badge = Badge::new(
        AttrMap::new()
            .with("class", "foo bar barbaz")
            .with("remove_class", "bar"),
    );
    let classes = class_attr(&render_to_string(&mut badge));
    assert!(classes.iter().any(|c| c == "foo"));
    assert!(classes.iter().any(|c| c == "barbaz"));
    assert!(!classes.iter().any(|c| c == "bar"));
}

#[test]
fn remove_class_can_delete_a_derived_class() {
    let mut plain = Badge::new(AttrMap::new());
    let derived = class_attr(&render_to_string(&mut plain));
    let victim = derived.first().unwrap().clone();

    let mut badge = Badge::new(AttrMap::new().with("remove_class", victim.clone()));
    let classes = class_attr(&render_to_string(&mut badge));
    assert!(!classes.contains(&victim));
    // The rest of the derived classes survive.
    assert_eq!(classes.len(), derived.len() - 1);
}

#[test]
fn progress_clamps_out_of_range_values() {
    let mut over = Progress::new(AttrMap::new().with("progress", 150));
    assert!(render_to_string(&mut over).contains("width: 100%"));

    let mut under = Progress::new(AttrMap::new().with("progress", -10));
    assert!(render_to_string(&mut under).contains("width: 0%"));
}

#[test]
fn unrecognized_options_pass_through_verbatim() {
    let mut button = Button::new(
        AttrMap::new()
            .with("data-testid", "primary-action")
            .with("aria-describedby", "hint")
            .with("onclick", "doThing()"),
    );
    let html = render_to_string(&mut button);
    assert!(html.contains("data-testid=\"primary-action\""));
    assert!(html.contains("aria-describedby=\"hint\""));
    assert!(html.contains("onclick=\"doThing()\""));
}

#[test]
fn generated_ids_are_distinct_across_instances() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        let mut accordion = Accordion::new(AttrMap::new());
        let html = render_to_string(&mut accordion);
        let id_start = html.find("id=\"").unwrap() + 4;
        let id = &html[id_start..];
        let id = id[..id.find('"').unwrap()].to_string();
        assert!(seen.insert(id), "generated ids collided");
    }
}

proptest::proptest! {
    #[test]
    fn arbitrary_color_options_never_break_badge_rendering(color in "\\PC{0,16}") {
        let mut badge = Badge::new(AttrMap::new().with("color", color.as_str())).text("x");
        let html = render_to_string(&mut badge);
        // Either a supported color was named or the info default applies;
        // the bag value itself never leaks into the classes.
        let classes = class_attr(&html);
        proptest::prop_assert!(
            classes.iter().any(|c| c.starts_with("bg-")),
            "no background class in {html}"
        );
    }
}

#[test]
fn repeated_slots_render_in_append_order() {
    let mut tabs = Tabs::new(AttrMap::new().with("id", "t"))
        .add_tab(Tab::new("zebra", Markup::text("z")))
        .add_tab(Tab::new("apple", Markup::text("a")))
        .add_tab(Tab::new("mango", Markup::text("m")));
    let html = render_to_string(&mut tabs);
    let zebra = html.find("zebra").unwrap();
    let apple = html.find("apple").unwrap();
    let mango = html.find("mango").unwrap();
    assert!(zebra < apple && apple < mango);
}
