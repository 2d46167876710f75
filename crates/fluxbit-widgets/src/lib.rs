#![forbid(unsafe_code)]

//! Core widgets for Fluxbit.
//!
//! Every widget follows the same shape: `new` consumes an option bag
//! ([`fluxbit_core::AttrMap`]), validates enum-like options through
//! `fluxbit_style::validate`, composes derived classes at the front of the
//! `class` attribute, and applies the caller's `remove_class` option as the
//! final constructor step. Slot content is supplied through `with_*`/
//! `add_*` setters, and rendering runs the three-phase lifecycle from
//! [`fluxbit_core::component`].
//!
//! Interactivity is not implemented here: widgets only emit the
//! `data-*`/`aria-*` attribute contract a client-side behavior layer
//! consumes.

pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod base;
pub mod button;
pub mod button_group;
pub mod card;
pub mod carousel;
pub mod dropdown;
pub mod icons;
pub mod modal;
pub mod popover;
pub mod progress;
pub mod spinner;
pub mod table;
pub mod tabs;
pub mod timeline;
pub mod tooltip;

pub use accordion::{Accordion, AccordionPanel};
pub use alert::Alert;
pub use avatar::Avatar;
pub use badge::Badge;
pub use button::{Button, GroupPosition};
pub use button_group::ButtonGroup;
pub use card::Card;
pub use carousel::Carousel;
pub use dropdown::{Dropdown, DropdownEntry};
pub use modal::Modal;
pub use popover::Popover;
pub use progress::Progress;
pub use spinner::Spinner;
pub use table::{Table, TableRow};
pub use tabs::{Tab, Tabs};
pub use timeline::{Timeline, TimelineItem};
pub use tooltip::Tooltip;
