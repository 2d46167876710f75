//! Carousel component.
//!
//! Slides are a repeated slot. A failing slide producer is isolated:
//! [`Carousel::try_add_slide`] substitutes empty content for that one
//! slide instead of aborting the whole render. Indicator and control
//! markup is derived from the slide count after the slot is fully
//! materialized.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::id::{RandomId, ensure_id};
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::SlotList;
use fluxbit_style::{StyleScope, StyleTable};

use crate::icons;

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes("base", "relative w-full")
        .classes("viewport", "relative h-56 overflow-hidden rounded-lg md:h-96")
        .classes("slide", "hidden duration-700 ease-in-out")
        .classes(
            "indicators",
            "absolute z-30 flex -translate-x-1/2 bottom-5 left-1/2 space-x-3 rtl:space-x-reverse",
        )
        .classes("indicator", "w-3 h-3 rounded-full")
        .table("control", |t| {
            t.classes(
                "button",
                "absolute top-0 z-30 flex items-center justify-center h-full px-4 cursor-pointer \
                 group focus:outline-none",
            )
            .classes(
                "span",
                "inline-flex items-center justify-center w-10 h-10 rounded-full bg-white/30 \
                 group-hover:bg-white/50 group-focus:ring-4 group-focus:ring-white \
                 dark:bg-gray-800/30 dark:group-hover:bg-gray-800/60 \
                 dark:group-focus:ring-gray-800/70",
            )
            .classes("icon", "w-4 h-4 text-white dark:text-gray-800")
        })
        .build()
}

/// Style table for the carousel family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// A sliding gallery of content panels.
#[derive(Debug)]
pub struct Carousel {
    attrs: AttrMap,
    id: RandomId,
    slide: bool,
    indicators: bool,
    controls: bool,
    slides: SlotList<Markup>,
}

impl Carousel {
    /// Recognized options: `slide` (auto-advance, default true),
    /// `indicators` (default true), `controls` (default true),
    /// `remove_class`. A caller-supplied `id` wins over the generated one.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let slide = attrs.take_flag("slide", true);
        let indicators = attrs.take_flag("indicators", true);
        let controls = attrs.take_flag("controls", true);
        class_list::add(&mut attrs, styles.resolve(&["base"], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            id: RandomId::new("carousel"),
            slide,
            indicators,
            controls,
            slides: SlotList::new(),
        }
    }

    /// Append a slide. Insertion order is rendering order.
    #[must_use]
    pub fn add_slide(mut self, content: Markup) -> Self {
        self.slides.push(content);
        self
    }

    /// Append a slide from a fallible producer.
    ///
    /// A failed producer is isolated to its own slide: the error is logged
    /// and empty content takes the slide's place, preserving the indices of
    /// the slides around it.
    #[must_use]
    pub fn try_add_slide<E, F>(mut self, produce: F) -> Self
    where
        E: std::fmt::Display,
        F: FnOnce() -> Result<Markup, E>,
    {
        match produce() {
            Ok(content) => self.slides.push(content),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%error, slide = self.slides.len(), "slide producer failed");
                #[cfg(not(feature = "tracing"))]
                let _ = error;
                self.slides.push(Markup::Empty);
            }
        }
        self
    }

    fn render_indicators(&self) -> Markup {
        let styles = STYLES.load();
        Element::new("div")
            .class(styles.resolve(&["indicators"], ""))
            .children(self.slides.iter().enumerate().map(|(index, _)| {
                Element::new("button")
                    .attr("type", "button")
                    .class(styles.resolve(&["indicator"], ""))
                    .attr("aria-current", if index == 0 { "true" } else { "false" })
                    .attr("aria-label", format!("Slide {}", index + 1))
                    .attr("data-carousel-slide-to", index as i64)
                    .build()
            }))
            .build()
    }

    fn render_control(&self, forward: bool) -> Markup {
        let styles = STYLES.load();
        let icon_attrs = AttrMap::new().with("class", styles.resolve(&["control", "icon"], ""));
        let (data_attr, label, icon) = if forward {
            ("data-carousel-next", "next", icons::chevron_right(icon_attrs))
        } else {
            ("data-carousel-prev", "previous", icons::chevron_left(icon_attrs))
        };
        let placement = if forward { "end-0" } else { "start-0" };
        Element::new("button")
            .attr("type", "button")
            .class(class_list::join([
                Some(styles.resolve(&["control", "button"], "")),
                Some(placement),
            ]))
            .attr(data_attr, true)
            .child(
                Element::new("span")
                    .class(styles.resolve(&["control", "span"], ""))
                    .child(icon)
                    .child(
                        Element::new("span")
                            .class("sr-only")
                            .text(fluxbit_i18n::label(label))
                            .build(),
                    )
                    .build(),
            )
            .build()
    }
}

impl Component for Carousel {
    fn before_render(&mut self) {
        ensure_id(&mut self.attrs, &self.id);
        let mode = if self.slide { "slide" } else { "static" };
        self.attrs.set("data-carousel", mode);
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let viewport = Element::new("div")
            .class(styles.resolve(&["viewport"], ""))
            .children(self.slides.iter().enumerate().map(|(index, slide)| {
                let el = Element::new("div").class(styles.resolve(&["slide"], ""));
                let el = if index == 0 {
                    el.attr("data-carousel-item", "active")
                } else {
                    el.attr("data-carousel-item", true)
                };
                el.child(slide.clone()).build()
            }))
            .build();
        let mut el = Element::new("div")
            .with_attrs(self.attrs.clone())
            .child(viewport);
        if self.indicators && !self.slides.is_empty() {
            el = el.child(self.render_indicators());
        }
        if self.controls {
            el = el.child(self.render_control(false)).child(self.render_control(true));
        }
        el.build()
    }
}
