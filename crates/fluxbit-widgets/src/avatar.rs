//! Avatar component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_style::{StyleScope, StyleTable, validate};

use crate::base::Attachment;

/// Supported presence states for the status dot.
pub const STATUSES: &[&str] = &["online", "offline", "busy", "away"];

/// Supported status dot corners.
pub const STATUS_POSITIONS: &[&str] = &[
    "top-left",
    "top-right",
    "bottom-left",
    "bottom-right",
];

const DEFAULT_SIZE: usize = 2;
const DEFAULT_STATUS_POSITION: &str = "top-right";

fn defaults() -> StyleTable {
    StyleTable::builder()
        .list(
            "sizes",
            ["w-6 h-6", "w-8 h-8", "w-10 h-10", "w-20 h-20", "w-36 h-36"],
        )
        .classes("rounded", "rounded-full")
        .classes("square", "rounded-sm")
        .classes(
            "placeholder",
            "relative overflow-hidden bg-gray-100 dark:bg-gray-600",
        )
        .classes("placeholder_icon", "absolute w-auto h-auto text-gray-400 -left-1")
        .table("status", |t| {
            t.classes(
                "base",
                "absolute w-3.5 h-3.5 border-2 border-white dark:border-gray-800 rounded-full",
            )
            .classes("online", "bg-green-400")
            .classes("offline", "bg-gray-400")
            .classes("busy", "bg-red-400")
            .classes("away", "bg-yellow-400")
        })
        .table("status_position", |t| {
            t.classes("top-left", "top-0 start-0")
                .classes("top-right", "top-0 end-0")
                .classes("bottom-left", "bottom-0 start-0")
                .classes("bottom-right", "bottom-0 end-0")
        })
        .build()
}

/// Style table for the avatar family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A user image with optional presence indicator, or a placeholder
/// silhouette when no image is given.
#[derive(Debug)]
pub struct Avatar {
    attrs: AttrMap,
    src: Option<String>,
    alt: String,
    status: Option<String>,
    status_position: String,
    attachment: Attachment,
}

impl Avatar {
    /// Recognized options: `src`, `alt`, `size` (index, default 2),
    /// `rounded` (default true), `status`, `status_position` (default
    /// `top-right`), `remove_class`, and the attachment options.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let src = attrs.take_str("src");
        let alt = attrs.take_str("alt").unwrap_or_default();
        let size = attrs.take_int("size").unwrap_or(DEFAULT_SIZE as i64);
        let rounded = attrs.take_flag("rounded", true);
        let status = attrs
            .take_str("status")
            .map(|s| validate(Some(&s), Some(STATUSES), "online").to_string());
        let position = attrs.take_str("status_position");
        let status_position = validate(
            position.as_deref(),
            Some(STATUS_POSITIONS),
            DEFAULT_STATUS_POSITION,
        )
        .to_string();

        let shape = if rounded { "rounded" } else { "square" };
        let derived = class_list::join([
            Some(styles.size_class("sizes", size, DEFAULT_SIZE)),
            Some(styles.resolve(&[shape], "")),
            src.is_none().then(|| styles.resolve(&["placeholder"], "")),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        let attachment = Attachment::take_from(&mut attrs, "avatar");
        class_list::apply_remove_option(&mut attrs);

        Self {
            attrs,
            src,
            alt,
            status,
            status_position,
            attachment,
        }
    }

    fn render_image(&self) -> Markup {
        let styles = STYLES.load();
        match &self.src {
            Some(src) => Element::new("img")
                .with_attrs(self.attrs.clone())
                .attr("src", src.as_str())
                .attr("alt", self.alt.as_str())
                .build(),
            None => Element::new("div")
                .with_attrs(self.attrs.clone())
                .child(placeholder_icon(
                    AttrMap::new().with("class", styles.resolve(&["placeholder_icon"], "")),
                ))
                .build(),
        }
    }
}

/// Silhouette shown when no image source is given.
fn placeholder_icon(mut attrs: AttrMap) -> Markup {
    attrs.set("aria-hidden", "true");
    attrs.set("xmlns", "http://www.w3.org/2000/svg");
    attrs.set("fill", "currentColor");
    attrs.set("viewBox", "0 0 20 20");
    Element::new("svg")
        .with_attrs(attrs)
        .child(
            Element::new("path")
                .attr("fill-rule", "evenodd")
                .attr(
                    "d",
                    "M10 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6Zm-7 9a7 7 0 1 1 14 0H3Z",
                )
                .attr("clip-rule", "evenodd")
                .build(),
        )
        .build()
}

impl Component for Avatar {
    fn before_render(&mut self) {
        self.attachment.wire(&mut self.attrs);
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let image = self.render_image();
        let root = match &self.status {
            Some(status) => {
                let dot_classes = class_list::join([
                    Some(styles.resolve(&["status", "base"], "")),
                    Some(styles.resolve(&["status", status.as_str()], "")),
                    Some(styles.resolve(&["status_position", self.status_position.as_str()], "")),
                ]);
                Element::new("div")
                    .class("relative inline-block")
                    .child(image)
                    .child(Element::new("span").class(dot_classes).build())
                    .build()
            }
            None => image,
        };
        self.attachment.append_to(root)
    }
}
