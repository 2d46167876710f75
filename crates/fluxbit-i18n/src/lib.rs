#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for Fluxbit.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, and variable interpolation for the handful of literal
//! UI strings widgets emit ("Close", "Dismiss", "Previous", "Next",
//! "Loading...").
//!
//! # Role in Fluxbit
//! `fluxbit-i18n` isolates localization concerns so widgets stay
//! deterministic while still supporting multiple languages.
//!
//! # How it fits in the system
//! `fluxbit-widgets` resolves accessibility labels through the global
//! catalog before rendering. This crate depends on nothing else, keeping
//! the localization layer reusable and testable.

pub mod catalog;

pub use catalog::{LocaleStrings, StringCatalog, configure, label, set_locale};
