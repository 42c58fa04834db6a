//! Type-safe identifiers for stations.
//!
//! Identifiers use Arc<str> for cheap cloning across request handlers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StationIdentifier(Arc<str>);

impl StationIdentifier {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    /// Derive an identifier from a display name.
    ///
    /// Lowercases ASCII alphanumerics and collapses every other run of
    /// characters into a single `-`, e.g. `"Posko Damkar Prov. Sumsel"`
    /// becomes `"posko-damkar-prov-sumsel"`.
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut pending_dash = false;

        for ch in name.chars() {
            if ch.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(ch.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }

        Self::new(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for StationIdentifier {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for StationIdentifier {}

impl Hash for StationIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for StationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StationIdentifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StationIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = StationIdentifier::new("pos-kemuning");
        let id2 = StationIdentifier::new("pos-kemuning");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_identifier_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(StationIdentifier::new("test"), 42);

        assert_eq!(map.get(&StationIdentifier::new("test")), Some(&42));
    }

    #[test]
    fn test_identifier_from_name() {
        assert_eq!(
            StationIdentifier::from_name("Posko Damkar Prov. Sumsel").as_str(),
            "posko-damkar-prov-sumsel"
        );
        assert_eq!(StationIdentifier::from_name("  BPB -- 2 ").as_str(), "bpb-2");
        assert_eq!(StationIdentifier::from_name("").as_str(), "");
    }

    #[test]
    fn test_identifier_display() {
        let id = StationIdentifier::new("pos-aal");
        assert_eq!(format!("{}", id), "pos-aal");
    }
}
