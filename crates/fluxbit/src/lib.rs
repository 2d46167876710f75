#![forbid(unsafe_code)]

//! Fluxbit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use fluxbit::prelude::*;
//!
//! let mut badge = Badge::new(AttrMap::new().with("color", "success")).text("Done");
//! let html = render_to_string(&mut badge);
//! assert!(html.contains("bg-green-100"));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use fluxbit_core::attrs::{AttrMap, AttrValue};
pub use fluxbit_core::class_list;
pub use fluxbit_core::component::{Component, render_component, render_to_string};
pub use fluxbit_core::id::RandomId;
pub use fluxbit_core::markup::{Element, Markup};
pub use fluxbit_core::slot::{Slot, SlotList};

// --- Style re-exports ------------------------------------------------------

pub use fluxbit_style::{StyleScope, StyleTable, StyleTableBuilder, StyleValue, validate};

// --- Widget re-exports -----------------------------------------------------

pub use fluxbit_widgets::{
    Accordion, AccordionPanel, Alert, Avatar, Badge, Button, ButtonGroup, Card, Carousel,
    Dropdown, DropdownEntry, GroupPosition, Modal, Popover, Progress, Spinner, Tab, Table,
    TableRow, Tabs, Timeline, TimelineItem, Tooltip, icons,
};

// --- Localization ----------------------------------------------------------

pub use fluxbit_i18n as i18n;

/// Commonly used imports for building pages out of widgets.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionPanel, Alert, AttrMap, Avatar, Badge, Button, ButtonGroup, Card,
        Carousel, Component, Dropdown, DropdownEntry, Element, Markup, Modal, Popover, Progress,
        Spinner, Tab, Table, TableRow, Tabs, Timeline, TimelineItem, Tooltip, render_component,
        render_to_string,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_renders_a_widget_end_to_end() {
        let mut alert = Alert::new(AttrMap::new().with("color", "warning")).text("Careful");
        let html = render_to_string(&mut alert);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("text-yellow-800"));
    }

    #[test]
    fn prelude_exposes_markup_primitives() {
        let markup = Element::new("div").text("x").build();
        assert_eq!(markup.to_html(), "<div>x</div>");
    }
}
