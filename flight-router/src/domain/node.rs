//! Transit node identifiers and visibility metadata.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid node identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid node id: {reason}")]
pub struct InvalidNodeId {
    reason: &'static str,
}

/// A validated external transit-node identifier.
///
/// Node ids come from static network data and are 1-indexed; zero never
/// appears there, so it is rejected at construction and any `NodeId` value
/// is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_router::domain::NodeId;
///
/// let id = NodeId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
///
/// // Zero is rejected
/// assert!(NodeId::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NodeId(u32);

impl NodeId {
    /// Validate a raw identifier from static data.
    pub fn new(raw: u32) -> Result<Self, InvalidNodeId> {
        if raw == 0 {
            return Err(InvalidNodeId {
                reason: "must be non-zero",
            });
        }
        Ok(NodeId(raw))
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based bit position of this node in a packed node mask.
    pub(crate) fn bit(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u32> for NodeId {
    type Error = InvalidNodeId;

    fn try_from(raw: u32) -> Result<Self, InvalidNodeId> {
        NodeId::new(raw)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> u32 {
        id.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an externally evaluated gating condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionId(pub u32);

/// The two recognized factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    League,
    Syndicate,
}

/// Which factions may see a transit node.
///
/// Static data flags every node with the factions it is available to; a node
/// flagged for neither faction is invisible to all travelers (such nodes do
/// exist in the data and are filtered during graph construction).
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactionFlags(u8);

impl FactionFlags {
    pub const NONE: FactionFlags = FactionFlags(0);
    pub const LEAGUE: FactionFlags = FactionFlags(0b01);
    pub const SYNDICATE: FactionFlags = FactionFlags(0b10);
    pub const BOTH: FactionFlags = FactionFlags(0b11);

    /// The flag a traveler of the given faction requires.
    pub fn for_faction(faction: Faction) -> Self {
        match faction {
            Faction::League => Self::LEAGUE,
            Faction::Syndicate => Self::SYNDICATE,
        }
    }

    /// Whether every flag in `other` is set here.
    pub fn contains(self, other: FactionFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any faction flag is set at all.
    pub fn any(self) -> bool {
        self.0 != 0
    }
}

impl BitOr for FactionFlags {
    type Output = FactionFlags;

    fn bitor(self, rhs: FactionFlags) -> FactionFlags {
        FactionFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for FactionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FactionFlags::NONE => write!(f, "FactionFlags(none)"),
            FactionFlags::LEAGUE => write!(f, "FactionFlags(league)"),
            FactionFlags::SYNDICATE => write!(f, "FactionFlags(syndicate)"),
            _ => write!(f, "FactionFlags(both)"),
        }
    }
}

/// A named waypoint in the travel network.
///
/// The record carries everything the planner needs to decide whether a
/// traveler may see the node: its faction flags and an optional gating
/// condition evaluated against the traveler at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitNode {
    pub id: NodeId,
    pub flags: FactionFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionId>,
}

impl TransitNode {
    /// Create a node with no gating condition.
    pub fn new(id: NodeId, flags: FactionFlags) -> Self {
        Self {
            id,
            flags,
            condition: None,
        }
    }

    /// Attach a gating condition.
    pub fn with_condition(mut self, condition: ConditionId) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Whether the given faction may see this node at all.
    pub fn visible_to(&self, faction: Faction) -> bool {
        self.flags.contains(FactionFlags::for_faction(faction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_rejects_zero() {
        assert!(NodeId::new(0).is_err());
        assert!(NodeId::new(1).is_ok());
        assert!(NodeId::new(u32::MAX).is_ok());
    }

    #[test]
    fn node_id_bit_is_zero_based() {
        assert_eq!(NodeId::new(1).unwrap().bit(), 0);
        assert_eq!(NodeId::new(9).unwrap().bit(), 8);
    }

    #[test]
    fn node_id_display() {
        let id = NodeId::new(42).unwrap();
        assert_eq!(format!("{id}"), "42");
        assert_eq!(format!("{id:?}"), "NodeId(42)");
    }

    #[test]
    fn flags_contains() {
        assert!(FactionFlags::BOTH.contains(FactionFlags::LEAGUE));
        assert!(FactionFlags::BOTH.contains(FactionFlags::SYNDICATE));
        assert!(!FactionFlags::LEAGUE.contains(FactionFlags::SYNDICATE));
        assert!(FactionFlags::LEAGUE.contains(FactionFlags::NONE));
    }

    #[test]
    fn flags_union() {
        assert_eq!(
            FactionFlags::LEAGUE | FactionFlags::SYNDICATE,
            FactionFlags::BOTH
        );
    }

    #[test]
    fn flags_any() {
        assert!(!FactionFlags::NONE.any());
        assert!(FactionFlags::LEAGUE.any());
        assert!(FactionFlags::BOTH.any());
    }

    #[test]
    fn node_visibility_follows_flags() {
        let id = NodeId::new(3).unwrap();
        let node = TransitNode::new(id, FactionFlags::LEAGUE);
        assert!(node.visible_to(Faction::League));
        assert!(!node.visible_to(Faction::Syndicate));

        let both = TransitNode::new(id, FactionFlags::BOTH);
        assert!(both.visible_to(Faction::League));
        assert!(both.visible_to(Faction::Syndicate));
    }

    #[test]
    fn with_condition_attaches() {
        let id = NodeId::new(3).unwrap();
        let node = TransitNode::new(id, FactionFlags::BOTH).with_condition(ConditionId(17));
        assert_eq!(node.condition, Some(ConditionId(17)));
    }

    #[test]
    fn node_id_serde_rejects_zero() {
        assert!(serde_json::from_str::<NodeId>("0").is_err());
        let id: NodeId = serde_json::from_str("5").unwrap();
        assert_eq!(id.get(), 5);
    }
}
