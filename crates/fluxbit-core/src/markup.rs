//! Markup tree and HTML serialization.
//!
//! Widgets render into a [`Markup`] tree: element nodes carrying an
//! [`AttrMap`] and ordered children, escaped text, trusted raw fragments,
//! and fragments for sibling sequences. Serialization ([`Markup::to_html`])
//! escapes text and attribute values and handles void elements.

use crate::attrs::{AttrMap, AttrValue};
use crate::escape::escape_html;

/// Elements that never take a closing tag or children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in the rendered markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    /// An element with attributes and children.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
    /// Pre-rendered trusted markup, emitted verbatim.
    Raw(String),
    /// An ordered sequence of sibling nodes with no wrapper element.
    Fragment(Vec<Markup>),
    /// Nothing. Renders as the empty string.
    Empty,
}

impl Markup {
    /// Escaped text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Trusted raw markup node.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::Raw(content.into())
    }

    /// Whether this node renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Fragment(items) => items.iter().all(Self::is_empty),
            Self::Element(_) => false,
        }
    }

    /// Serialize the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(s) => out.push_str(&escape_html(s)),
            Self::Raw(s) => out.push_str(s),
            Self::Fragment(items) => {
                for item in items {
                    item.write_into(out);
                }
            }
            Self::Element(el) => el.write_into(out),
        }
    }
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element node: tag name, attribute bag, ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, emitted as-is.
    pub tag: String,
    /// Attributes, serialized in insertion order.
    pub attrs: AttrMap,
    /// Ordered children. Ignored for void elements.
    pub children: Vec<Markup>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttrMap::new(),
            children: Vec::new(),
        }
    }

    /// Replace the attribute bag.
    #[must_use]
    pub fn with_attrs(mut self, attrs: AttrMap) -> Self {
        self.attrs = attrs;
        self
    }

    /// Set a single attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes.into())
    }

    /// Append a child node. Empty nodes are dropped.
    #[must_use]
    pub fn child(mut self, node: impl Into<Markup>) -> Self {
        let node = node.into();
        if !matches!(node, Markup::Empty) {
            self.children.push(node);
        }
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = Markup>) -> Self {
        for node in nodes {
            self = self.child(node);
        }
        self
    }

    /// Append an escaped text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Markup::text(content))
    }

    /// Finish into a [`Markup`] node.
    pub fn build(self) -> Markup {
        Markup::Element(self)
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in self.attrs.iter() {
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Flag(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Text(s) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(s));
                    out.push('"');
                }
                AttrValue::Int(i) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&i.to_string());
                    out.push('"');
                }
            }
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_into(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_renders_tag_attrs_children() {
        let html = Element::new("div")
            .attr("id", "x")
            .class("a b")
            .text("hi")
            .build()
            .to_html();
        assert_eq!(html, "<div id=\"x\" class=\"a b\">hi</div>");
    }

    #[test]
    fn text_children_are_escaped() {
        let html = Element::new("span").text("<b>&</b>").build().to_html();
        assert_eq!(html, "<span>&lt;b&gt;&amp;&lt;/b&gt;</span>");
    }

    #[test]
    fn raw_children_are_not_escaped() {
        let html = Element::new("span")
            .child(Markup::raw("<b>bold</b>"))
            .build()
            .to_html();
        assert_eq!(html, "<span><b>bold</b></span>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let html = Element::new("div").attr("title", "a\"b").build().to_html();
        assert_eq!(html, "<div title=\"a&quot;b\"></div>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let html = Element::new("img").attr("src", "a.png").build().to_html();
        assert_eq!(html, "<img src=\"a.png\">");
    }

    #[test]
    fn true_flag_renders_bare_false_flag_renders_nothing() {
        let html = Element::new("button")
            .attr("disabled", true)
            .attr("hidden", false)
            .build()
            .to_html();
        assert_eq!(html, "<button disabled></button>");
    }

    #[test]
    fn int_attribute_renders_decimal() {
        let html = Element::new("td").attr("colspan", 2).build().to_html();
        assert_eq!(html, "<td colspan=\"2\"></td>");
    }

    #[test]
    fn fragment_concatenates_in_order() {
        let m = Markup::Fragment(vec![
            Markup::text("a"),
            Element::new("br").build(),
            Markup::text("b"),
        ]);
        assert_eq!(m.to_html(), "a<br>b");
    }

    #[test]
    fn empty_markup_renders_nothing() {
        assert_eq!(Markup::Empty.to_html(), "");
        assert!(Markup::Empty.is_empty());
        assert!(Markup::Fragment(vec![Markup::Empty]).is_empty());
    }

    #[test]
    fn empty_children_are_dropped() {
        let el = Element::new("div").child(Markup::Empty).build();
        match el {
            Markup::Element(e) => assert!(e.children.is_empty()),
            _ => unreachable!(),
        }
    }
}
