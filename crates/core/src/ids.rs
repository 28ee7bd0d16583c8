//! Entity identifiers.
//!
//! Server-assigned ids are positive integers. Entities created optimistically
//! carry a session-unique negative placeholder id until the server confirms
//! them. On the wire both travel as a single signed integer; the sign carries
//! the tag.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a domain entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityId {
    /// Locally-synthesized placeholder for a not-yet-persisted entity.
    /// The inner value is strictly negative.
    Pending(i64),
    /// Server-assigned identifier. The inner value is positive.
    Confirmed(i64),
}

impl EntityId {
    /// Maps the signed wire form back to the tag: negative means pending.
    pub fn from_wire(raw: i64) -> Self {
        if raw < 0 {
            EntityId::Pending(raw)
        } else {
            EntityId::Confirmed(raw)
        }
    }

    /// Signed wire form of the identifier.
    pub fn as_wire(&self) -> i64 {
        match self {
            EntityId::Pending(raw) | EntityId::Confirmed(raw) => *raw,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, EntityId::Pending(_))
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, EntityId::Confirmed(_))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Confirmed(0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(EntityId::from_wire(raw))
    }
}

/// Entities addressable by id inside a cached collection.
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

/// Allocates placeholder ids for optimistic entities.
///
/// Ids are strictly negative and strictly decreasing, so they are unique
/// within a session and disjoint from server-assigned positive ids. One
/// allocator is shared by every service in a context.
#[derive(Debug, Default)]
pub struct PlaceholderIds {
    next: AtomicI64,
}

impl PlaceholderIds {
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(0),
        }
    }

    /// Returns the next placeholder id.
    pub fn next(&self) -> EntityId {
        EntityId::Pending(self.next.fetch_sub(1, Ordering::Relaxed) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_round_trip() {
        assert_eq!(EntityId::from_wire(42), EntityId::Confirmed(42));
        assert_eq!(EntityId::from_wire(-7), EntityId::Pending(-7));
        assert_eq!(EntityId::Confirmed(42).as_wire(), 42);
        assert_eq!(EntityId::Pending(-7).as_wire(), -7);
    }

    #[test]
    fn test_serde_uses_signed_integer() {
        let json = serde_json::to_string(&EntityId::Confirmed(5)).unwrap();
        assert_eq!(json, "5");

        let json = serde_json::to_string(&EntityId::Pending(-3)).unwrap();
        assert_eq!(json, "-3");

        let id: EntityId = serde_json::from_str("-12").unwrap();
        assert!(id.is_pending());
        let id: EntityId = serde_json::from_str("12").unwrap();
        assert!(id.is_confirmed());
    }

    #[test]
    fn test_placeholder_ids_are_negative_and_unique() {
        let ids = PlaceholderIds::new();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();

        for id in [a, b, c] {
            assert!(id.is_pending());
            assert!(id.as_wire() < 0);
        }
        assert_eq!(a, EntityId::Pending(-1));
        assert_eq!(b, EntityId::Pending(-2));
        assert_eq!(c, EntityId::Pending(-3));
    }
}
