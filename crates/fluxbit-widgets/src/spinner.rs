//! Spinner component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable, validate};

/// Supported spinner accent colors.
pub const COLORS: &[&str] = &["info", "success", "failure", "warning", "pink", "purple", "gray"];

const DEFAULT_COLOR: &str = "info";
const DEFAULT_SIZE: usize = 2;

const TRACK_PATH: &str = "M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 \
                          78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 \
                          100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 \
                          50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 \
                          27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 \
                          9.08144 50.5908Z";

const ARC_PATH: &str = "M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 \
                        28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 \
                        75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 \
                        0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 \
                        38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 \
                        9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 \
                        70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 \
                        28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 \
                        93.9676 39.0409Z";

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "inline animate-spin text-gray-200 dark:text-gray-600")
        .table("colors", |t| {
            t.classes("info", "fill-blue-600")
                .classes("success", "fill-green-500")
                .classes("failure", "fill-red-600")
                .classes("warning", "fill-yellow-400")
                .classes("pink", "fill-pink-600")
                .classes("purple", "fill-purple-600")
                .classes("gray", "fill-gray-600 dark:fill-gray-300")
        })
        .list("sizes", ["w-4 h-4", "w-6 h-6", "w-8 h-8", "w-10 h-10", "w-16 h-16"])
        .build()
}

/// Style table for the spinner family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// An animated loading indicator with a screen-reader label.
#[derive(Debug)]
pub struct Spinner {
    attrs: AttrMap,
    label: String,
}

impl Spinner {
    /// Recognized options: `color` (default `info`), `size` (index,
    /// default 2), `label` (screen-reader text, defaults to the localized
    /// "Loading..." string), `remove_class`.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let color = attrs.take_str("color");
        let color = validate(color.as_deref(), Some(COLORS), DEFAULT_COLOR);
        let size = attrs.take_int("size").unwrap_or(DEFAULT_SIZE as i64);
        let label = attrs
            .take_str("label")
            .unwrap_or_else(|| fluxbit_i18n::label("loading"));

        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            Some(styles.resolve(&["colors", color], "")),
            Some(styles.size_class("sizes", size, DEFAULT_SIZE)),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        class_list::apply_remove_option(&mut attrs);

        Self { attrs, label }
    }
}

impl Component for Spinner {
    fn render(&self) -> Markup {
        let mut svg_attrs = self.attrs.clone();
        svg_attrs.set("aria-hidden", "true");
        svg_attrs.set("viewBox", "0 0 100 101");
        svg_attrs.set("fill", "none");
        svg_attrs.set("xmlns", "http://www.w3.org/2000/svg");
        let svg = Element::new("svg")
            .with_attrs(svg_attrs)
            .child(
                Element::new("path")
                    .attr("d", TRACK_PATH)
                    .attr("fill", "currentColor")
                    .build(),
            )
            .child(
                Element::new("path")
                    .attr("d", ARC_PATH)
                    .attr("fill", "currentFill")
                    .build(),
            )
            .build();
        Element::new("span")
            .attr("role", "status")
            .child(svg)
            .child(
                Element::new("span")
                    .class("sr-only")
                    .text(self.label.clone())
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
    fn renders_status_role_with_default_label() {
        let mut spinner = Spinner::new(AttrMap::new());
        let html = render_to_string(&mut spinner);
        assert!(html.contains("role=\"status\""));
        assert!(html.contains("Loading..."));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn custom_label_overrides_default() {
        let mut spinner = Spinner::new(AttrMap::new().with("label", "Crunching"));
        let html = render_to_string(&mut spinner);
        assert!(html.contains("Crunching"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn color_selects_fill() {
        let mut spinner = Spinner::new(AttrMap::new().with("color", "failure"));
        assert!(render_to_string(&mut spinner).contains("fill-red-600"));
    }

    #[test]
    fn unknown_color_degrades_to_info() {
        let mut spinner = Spinner::new(AttrMap::new().with("color", "teal"));
        assert!(render_to_string(&mut spinner).contains("fill-blue-600"));
    }

    #[test]
    fn size_index_clamps() {
        let mut spinner = Spinner::new(AttrMap::new().with("size", 999));
        assert!(render_to_string(&mut spinner).contains("w-16 h-16"));
    }

    #[test]
    fn pass_through_lands_on_svg() {
        let mut spinner = Spinner::new(AttrMap::new().with("data-testid", "spin"));
        let html = render_to_string(&mut spinner);
        let svg = html.find("<svg").unwrap();
        let attr = html.find("data-testid").unwrap();
        assert!(attr > svg);
    }
}
