//! Probabilistic id generation for ARIA wiring.
//!
//! Triggers and their targets (`aria-controls`, `data-*-target`) are often
//! computed independently within one render, so the generated id is
//! memoized per [`RandomId`] instance. Ids are drawn from a
//! non-cryptographic source and are not globally unique; ARIA wiring
//! degrades gracefully on the rare collision.

use std::cell::OnceCell;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::attrs::AttrMap;

/// Length of the random suffix.
const TOKEN_LEN: usize = 12;

/// A lowercase alphabetic token of [`TOKEN_LEN`] characters.
pub fn random_token() -> String {
    let mut rng = SmallRng::from_os_rng();
    (0..TOKEN_LEN)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// A lazily generated, per-instance-memoized id of the form
/// `"<prefix>-<token>"`.
///
/// Every read within one component instance returns the identical value;
/// distinct instances produce distinct ids with overwhelming probability.
#[derive(Debug, Clone)]
pub struct RandomId {
    prefix: String,
    cell: OnceCell<String>,
}

impl RandomId {
    /// Create an id with the given prefix, typically the component's name.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            cell: OnceCell::new(),
        }
    }

    /// The memoized id value, generated on first read.
    pub fn get(&self) -> &str {
        self.cell
            .get_or_init(|| format!("{}-{}", self.prefix, random_token()))
    }
}

/// Ensure the bag carries an `id`, returning it.
///
/// A caller-supplied id always wins and is never regenerated; otherwise the
/// memoized generated id is written into the bag.
pub fn ensure_id(attrs: &mut AttrMap, id: &RandomId) -> String {
    if let Some(existing) = attrs.get_str("id") {
        return existing.to_string();
    }
    let generated = id.get().to_string();
    attrs.set("id", generated.clone());
    generated
}
