#![forbid(unsafe_code)]

//! Core: markup tree, attribute bags, class composition, and component lifecycle.
//!
//! # Role in Fluxbit
//! `fluxbit-core` is the foundation layer. It owns the data model every
//! widget builds on: the attribute bag that doubles as the constructor
//! option map, the class-list composition rules, probabilistic id
//! generation for ARIA wiring, slot primitives, and the escaped HTML
//! markup tree widgets render into.
//!
//! # Primary responsibilities
//! - **AttrMap**: insertion-ordered attribute bag with destructive option
//!   consumption; unconsumed keys pass through verbatim to the output.
//! - **class_list**: front/back class insertion and exact-token removal.
//! - **RandomId**: memoized per-instance ids (`prefix-xxxxxxxxxxxx`).
//! - **Slot / SlotList**: single and repeated extension points.
//! - **Markup**: the tag tree plus HTML serialization with escaping.
//!
//! # How it fits in the system
//! `fluxbit-widgets` consumes these primitives to build concrete
//! components; `fluxbit-style` supplies the class strings that flow
//! through [`class_list`]. Nothing in this crate performs I/O.

pub mod attrs;
pub mod class_list;
pub mod component;
pub mod escape;
pub mod id;
pub mod markup;
pub mod slot;

pub use attrs::{AttrMap, AttrValue};
pub use component::{Component, render_component, render_to_string};
pub use id::{RandomId, ensure_id};
pub use markup::{Element, Markup};
pub use slot::{Slot, SlotList};
