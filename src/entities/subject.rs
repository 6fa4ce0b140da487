//! Subject entity - an immutable value object identified by name only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A subject taught in a batch (e.g. "Maths", "English").
///
/// Identity is the name alone; two subjects with the same name are the same
/// subject everywhere in the store.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Subject {
    /// Human-readable subject name
    pub name: String,
}

impl Subject {
    /// Creates a subject from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
