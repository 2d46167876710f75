//! Inline SVG icon helpers.
//!
//! Pure functions from an attribute bag to a markup fragment. The bag lets
//! callers size and color the icon (`class`) or tag it for the behavior
//! layer (`data-accordion-icon`); paths are fixed.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::markup::{Element, Markup};

fn stroked(mut attrs: AttrMap, view_box: &str, d: &str) -> Markup {
    attrs.set("aria-hidden", "true");
    attrs.set("xmlns", "http://www.w3.org/2000/svg");
    attrs.set("fill", "none");
    attrs.set("viewBox", view_box);
    Element::new("svg")
        .with_attrs(attrs)
        .child(
            Element::new("path")
                .attr("stroke", "currentColor")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", d)
                .build(),
        )
        .build()
}

/// Downward chevron, used by accordions and dropdown triggers.
pub fn chevron_down(attrs: AttrMap) -> Markup {
    stroked(attrs, "0 0 10 6", "m1 1 4 4 4-4")
}

/// Leftward chevron, used by carousel controls.
pub fn chevron_left(attrs: AttrMap) -> Markup {
    stroked(attrs, "0 0 6 10", "M5 1 1 5l4 4")
}

/// Rightward chevron, used by carousel controls.
pub fn chevron_right(attrs: AttrMap) -> Markup {
    stroked(attrs, "0 0 6 10", "m1 9 4-4-4-4")
}

/// Close cross, used by dismiss buttons.
pub fn close(attrs: AttrMap) -> Markup {
    stroked(attrs, "0 0 14 14", "m1 1 6 6m0 0 6 6M7 7l6-6M7 7l-6 6")
}

fn filled(mut attrs: AttrMap, view_box: &str, d: &str) -> Markup {
    attrs.set("aria-hidden", "true");
    attrs.set("xmlns", "http://www.w3.org/2000/svg");
    attrs.set("fill", "currentColor");
    attrs.set("viewBox", view_box);
    Element::new("svg")
        .with_attrs(attrs)
        .child(Element::new("path").attr("d", d).build())
        .build()
}

/// Horizontal ellipsis, used by overflow menus.
pub fn ellipsis_horizontal(attrs: AttrMap) -> Markup {
    filled(
        attrs,
        "0 0 16 3",
        "M2 0a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Zm6.041 0a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3ZM14 0a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Z",
    )
}

/// Filled info circle, used by alerts.
pub fn info_circle(attrs: AttrMap) -> Markup {
    filled(
        attrs,
        "0 0 20 20",
        "M10 .5a9.5 9.5 0 1 0 9.5 9.5A9.51 9.51 0 0 0 10 .5ZM9.5 4a1.5 1.5 0 1 1 0 3 1.5 1.5 \
         0 0 1 0-3ZM12 15H8a1 1 0 0 1 0-2h1v-3H8a1 1 0 0 1 0-2h2a1 1 0 0 1 1 1v4h1a1 1 0 0 1 0 2Z",
    )
}
