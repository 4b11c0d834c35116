#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared district naming types for the temperature map.
//!
//! Geometry features and measurement rows spell district names however
//! their publishers felt like (`"Bengaluru Urban"`, `"BENGALURU URBAN "`).
//! Both sides are reduced to a [`NormalizedKey`] before they are compared,
//! and this crate is the single place that reduction is defined.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical, comparable form of a district name.
///
/// Produced only by [`normalize_district_name`] (or [`NormalizedKey::new`]),
/// so every value of this type is already trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalizes `raw` into a key.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        normalize_district_name(raw)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the raw name was empty or all whitespace.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a raw district name into its join key.
///
/// Strips leading and trailing whitespace and upper-cases the rest.
/// Internal whitespace and punctuation are left untouched, so
/// `"Uttara  Kannada"` and `"Uttara Kannada"` stay distinct. Total for any
/// input, including the empty string, and idempotent.
#[must_use]
pub fn normalize_district_name(raw: &str) -> NormalizedKey {
    NormalizedKey(raw.trim().to_uppercase())
}
