#![forbid(unsafe_code)]

//! Style tables and variant resolution for Fluxbit.
//!
//! # Role in Fluxbit
//! `fluxbit-style` is the shared vocabulary for variant-dependent class
//! strings. Each widget family owns one nested [`StyleTable`] mapping
//! symbolic paths (`["colors", "info"]`) to CSS class tokens; widgets
//! resolve their options through it with safe fallback.
//!
//! # This crate provides
//! - [`StyleTable`] for nested class lookup with never-raising fallback.
//! - [`validate`] as the single normalization point for enum-like options.
//! - [`StyleScope`] for process-wide per-family tables with a load-time
//!   configuration override hook.
//!
//! # How it fits in the system
//! `fluxbit-widgets` resolves every color/size/placement option through
//! this crate before composing classes via `fluxbit-core::class_list`. An
//! invalid or unsupported option never raises; it degrades to the widget's
//! documented default.

pub mod scope;
pub mod table;

pub use scope::StyleScope;
pub use table::{StyleTable, StyleTableBuilder, StyleValue, validate};
