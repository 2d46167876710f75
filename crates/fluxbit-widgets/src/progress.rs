//! Progress bar component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable, validate};

/// Supported bar colors.
pub const COLORS: &[&str] = &["default", "dark", "blue", "red", "green", "yellow", "indigo", "purple"];

const DEFAULT_COLOR: &str = "default";
const DEFAULT_SIZE: usize = 1;

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "w-full bg-gray-200 rounded-full dark:bg-gray-700")
        .classes("bar", "rounded-full text-center text-xs font-medium leading-none")
        .table("colors", |t| {
            t.classes("default", "bg-blue-600 text-blue-100")
                .classes("dark", "bg-gray-600 text-gray-100 dark:bg-gray-300")
                .classes("blue", "bg-blue-600 text-blue-100")
                .classes("red", "bg-red-600 text-red-100")
                .classes("green", "bg-green-600 text-green-100")
                .classes("yellow", "bg-yellow-400 text-yellow-100")
                .classes("indigo", "bg-indigo-600 text-indigo-100")
                .classes("purple", "bg-purple-600 text-purple-100")
        })
        .list("sizes", ["h-1.5", "h-2.5", "h-4", "h-6"])
        .classes(
            "label",
            "mb-1 text-base font-medium text-gray-700 dark:text-gray-400",
        )
        .build()
}

/// Style table for the progress family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A horizontal completion indicator.
#[derive(Debug)]
pub struct Progress {
    attrs: AttrMap,
    progress: i64,
    color: String,
    size: i64,
    label: Option<String>,
    show_percent: bool,
}

impl Progress {
    /// Recognized options: `progress` (clamped to 0..=100), `color`
    /// (default `default`), `size` (index, default 1), `label` (text above
    /// the bar), `show_percent` (percentage inside the bar),
    /// `remove_class`. Everything else passes through to the track
    /// element.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let progress = attrs.take_int("progress").unwrap_or(0).clamp(0, 100);
        let color = attrs.take_str("color");
        let color = validate(color.as_deref(), Some(COLORS), DEFAULT_COLOR).to_string();
        let size = attrs.take_int("size").unwrap_or(DEFAULT_SIZE as i64);
        let label = attrs.take_str("label");
        let show_percent = attrs.take_flag("show_percent", false);

        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            Some(styles.size_class("sizes", size, DEFAULT_SIZE)),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        class_list::apply_remove_option(&mut attrs);

        Self {
            attrs,
            progress,
            color,
            size,
            label,
            show_percent,
        }
    }
}

impl Component for Progress {
    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let bar_classes = class_list::join([
            Some(styles.resolve(&["bar"], "")),
            Some(styles.resolve(&["colors", self.color.as_str()], "")),
            Some(styles.size_class("sizes", self.size, DEFAULT_SIZE)),
        ]);
        let mut bar = Element::new("div")
            .class(bar_classes)
            .attr("style", format!("width: {}%", self.progress));
        if self.show_percent {
            bar = bar.text(format!("{}%", self.progress));
        }
        let track = Element::new("div")
            .with_attrs(self.attrs.clone())
            .child(bar.build())
            .build();
        match &self.label {
            Some(label) => Markup::Fragment(vec![
                Element::new("div")
                    .class(styles.resolve(&["label"], ""))
                    .text(label.clone())
                    .build(),
                track,
            ]),
            None => track,
        }
    }
}
