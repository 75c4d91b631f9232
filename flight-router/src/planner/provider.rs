//! Collaborator seams for static transit data and the querying actor.

use crate::domain::{ConditionId, Faction, LinkId, NodeId, PathWaypoint, TransitLink, TransitNode};

/// Source of static transit-network records.
///
/// Implemented by whatever owns the static data tables in the surrounding
/// process. The planner only ever reads through this trait, so tests supply
/// in-memory fixtures ([`StaticNetwork`](crate::data::StaticNetwork)).
pub trait TransitData {
    /// All transit-link records, in a stable order.
    fn links(&self) -> Box<dyn Iterator<Item = &TransitLink> + '_>;

    /// The node record for `id`, if the static data defines one.
    fn node(&self, id: NodeId) -> Option<&TransitNode>;

    /// Ordered waypoints flown along `link`; empty when unknown.
    fn waypoints(&self, link: LinkId) -> &[PathWaypoint];

    /// Link id of a direct connection `from -> to`, if one exists.
    fn direct_link(&self, from: NodeId, to: NodeId) -> Option<LinkId>;
}

/// The actor a route is being computed for.
///
/// Node visibility is decided per traveler: the node must carry the
/// traveler's faction flag, and any gating condition on the node must hold
/// for this traveler right now. Condition evaluation lives outside this
/// crate; the planner only asks.
pub trait Traveler {
    /// Which faction's visibility flag this traveler requires on a node.
    fn faction(&self) -> Faction;

    /// Whether this traveler currently satisfies a gating condition.
    fn satisfies(&self, condition: ConditionId) -> bool;
}
