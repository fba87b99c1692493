use serde::{Deserialize, Serialize};

/// A domain name held in its canonical reversed form, eg. `mail.example.com`
/// is stored as `moc.elpmaxe.liam.`. Reversing puts the top-level label first,
/// so "A contains B in its subtree" collapses to "A's key is a string prefix
/// of B's key", and the trailing separator keeps whole-label matches only
/// (`com` cannot match `zcom`).
#[derive(
    Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Domain {
    key: String,
}

impl Domain {
    /// Builds the canonical key from one raw domain line. The input is taken
    /// as opaque text, no syntax validation happens here.
    pub fn new(raw: &str) -> Self {
        let mut prefixed = String::with_capacity(raw.len() + 1);
        prefixed.push('.');
        prefixed.push_str(raw);
        Self {
            key: prefixed.chars().rev().collect(),
        }
    }

    /// The stored reversed key. Sorting by this key groups every domain
    /// directly behind its ancestors.
    pub fn canonical_key(&self) -> &str {
        &self.key
    }

    /// True if `other` is `self` itself or lies anywhere below it in the
    /// name hierarchy.
    pub fn is_ancestor_of(&self, other: &Domain) -> bool {
        self.key.len() <= other.key.len() && other.key.starts_with(&self.key)
    }
}

impl From<&str> for Domain {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
