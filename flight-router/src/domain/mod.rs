//! Domain types for the transit network.
//!
//! Validated identifiers and the static records the planner consumes. All
//! types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod link;
mod node;

pub use link::{LinkId, MapId, PathWaypoint, Position, TransitLink};
pub use node::{ConditionId, Faction, FactionFlags, InvalidNodeId, NodeId, TransitNode};
