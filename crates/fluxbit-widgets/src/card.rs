//! Card component.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::SlotList;
use fluxbit_style::{StyleScope, StyleTable};

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "max-w-sm bg-white border border-gray-200 rounded-lg shadow-sm dark:bg-gray-800 \
             dark:border-gray-700",
        )
        .classes("link", "hover:bg-gray-100 dark:hover:bg-gray-700")
        .classes("horizontal", "flex flex-col items-center md:flex-row md:max-w-xl")
        .classes("body", "p-6")
        .classes("image", "rounded-t-lg")
        .classes(
            "image_horizontal",
            "object-cover w-full rounded-t-lg h-96 md:h-auto md:w-48 md:rounded-none \
             md:rounded-s-lg",
        )
        .build()
}

/// Style table for the card family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A content container, optionally clickable and with a leading image.
#[derive(Debug)]
pub struct Card {
    attrs: AttrMap,
    href: Option<String>,
    horizontal: bool,
    image: Option<(String, String)>,
    body: SlotList<Markup>,
}

impl Card {
    /// Recognized options: `href` (renders an anchor), `horizontal`,
    /// `image` + `image_alt`, `remove_class`. Everything else passes
    /// through.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let href = attrs.take_str("href");
        let horizontal = attrs.take_flag("horizontal", false);
        let image = attrs.take_str("image").map(|src| {
            let alt = attrs.take_str("image_alt").unwrap_or_default();
            (src, alt)
        });

        let derived = class_list::join([
            Some(styles.resolve(&["base"], "")),
            href.as_ref().map(|_| styles.resolve(&["link"], "")),
            horizontal.then(|| styles.resolve(&["horizontal"], "")),
        ]);
        class_list::add(&mut attrs, &derived, Position::Front);
        class_list::apply_remove_option(&mut attrs);

        Self {
            attrs,
            href,
            horizontal,
            image,
            body: SlotList::new(),
        }
    }

    /// Append body content. Insertion order is rendering order.
    #[must_use]
    pub fn add_content(mut self, content: Markup) -> Self {
        self.body.push(content);
        self
    }

    /// Append escaped text body content.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.add_content(Markup::text(content))
    }
}

impl Component for Card {
    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let image = match &self.image {
            Some((src, alt)) => {
                let image_key = if self.horizontal {
                    "image_horizontal"
                } else {
                    "image"
                };
                Element::new("img")
                    .class(styles.resolve(&[image_key], ""))
                    .attr("src", src.as_str())
                    .attr("alt", alt.as_str())
                    .build()
            }
            None => Markup::Empty,
        };
        let body = Element::new("div")
            .class(styles.resolve(&["body"], ""))
            .children(self.body.iter().cloned())
            .build();
        let tag = if self.href.is_some() { "a" } else { "div" };
        let mut el = Element::new(tag).with_attrs(self.attrs.clone());
        if let Some(href) = &self.href {
            el = el.attr("href", href.as_str());
        }
        el.child(image).child(body).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxbit_core::component::render_to_string;

    #[test]
    fn plain_card_is_a_div() {
        let mut card = Card::new(AttrMap::new()).text("body text");
        let html = render_to_string(&mut card);
        assert!(html.starts_with("<div"));
        assert!(html.contains("border-gray-200"));
        assert!(html.contains("body text"));
    }

    #[test]
    fn href_makes_card_clickable() {
        let mut card = Card::new(AttrMap::new().with("href", "/post/1"));
        let html = render_to_string(&mut card);
        assert!(html.starts_with("<a "));
        assert!(html.contains("href=\"/post/1\""));
        assert!(html.contains("hover:bg-gray-100"));
    }

    #[test]
    fn image_renders_before_body() {
        let mut card = Card::new(
            AttrMap::new().with("image", "/img.jpg").with("image_alt", "cover"),
        )
        .text("body");
        let html = render_to_string(&mut card);
        let img = html.find("<img").unwrap();
        let body = html.find("body").unwrap();
        assert!(img < body);
        assert!(html.contains("alt=\"cover\""));
        assert!(html.contains("rounded-t-lg"));
    }

    #[test]
    fn horizontal_changes_layout_and_image_classes() {
        let mut card = Card::new(
            AttrMap::new().with("horizontal", true).with("image", "/i.jpg"),
        );
        let html = render_to_string(&mut card);
        assert!(html.contains("md:flex-row"));
        assert!(html.contains("md:rounded-s-lg"));
    }

    #[test]
    fn content_renders_in_insertion_order() {
        let mut card = Card::new(AttrMap::new()).text("first").text("second");
        let html = render_to_string(&mut card);
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }
}
