//! In-memory transit data.
//!
//! [`StaticNetwork`] plays the role the live data tables play in the full
//! server: it implements [`TransitData`] over plain vectors, can be
//! assembled with a fluent builder, and loads from JSON. Tests and
//! development embeddings use it instead of real static data.

use serde::{Deserialize, Serialize};

use crate::domain::{LinkId, NodeId, PathWaypoint, TransitLink, TransitNode};
use crate::planner::TransitData;

/// One link record together with its flown path and direct-link marker.
///
/// Whether a link is "direct" is client data, not graph topology, which is
/// why the data source owns the marker rather than the planner deriving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LinkRecord {
    #[serde(flatten)]
    link: TransitLink,
    #[serde(default)]
    waypoints: Vec<PathWaypoint>,
    #[serde(default)]
    direct: bool,
}

/// An in-memory transit network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticNetwork {
    nodes: Vec<TransitNode>,
    links: Vec<LinkRecord>,
}

impl StaticNetwork {
    /// Load a network from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl TransitData for StaticNetwork {
    fn links(&self) -> Box<dyn Iterator<Item = &TransitLink> + '_> {
        Box::new(self.links.iter().map(|record| &record.link))
    }

    fn node(&self, id: NodeId) -> Option<&TransitNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    fn waypoints(&self, link: LinkId) -> &[PathWaypoint] {
        self.links
            .iter()
            .find(|record| record.link.id == link)
            .map(|record| record.waypoints.as_slice())
            .unwrap_or(&[])
    }

    fn direct_link(&self, from: NodeId, to: NodeId) -> Option<LinkId> {
        self.links
            .iter()
            .find(|record| {
                record.direct && record.link.origin == from && record.link.destination == to
            })
            .map(|record| record.link.id)
    }
}

/// Fluent assembly of a [`StaticNetwork`].
#[derive(Debug, Default)]
pub struct StaticNetworkBuilder {
    inner: StaticNetwork,
}

impl StaticNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node record.
    pub fn node(mut self, node: TransitNode) -> Self {
        self.inner.nodes.push(node);
        self
    }

    /// Add a link record with its flown waypoint path.
    pub fn link(
        mut self,
        id: LinkId,
        origin: NodeId,
        destination: NodeId,
        waypoints: Vec<PathWaypoint>,
    ) -> Self {
        self.inner.links.push(LinkRecord {
            link: TransitLink::new(id, origin, destination),
            waypoints,
            direct: false,
        });
        self
    }

    /// Add a link record marked as a direct connection.
    pub fn direct_link(
        mut self,
        id: LinkId,
        origin: NodeId,
        destination: NodeId,
        waypoints: Vec<PathWaypoint>,
    ) -> Self {
        self.inner.links.push(LinkRecord {
            link: TransitLink::new(id, origin, destination),
            waypoints,
            direct: true,
        });
        self
    }

    pub fn build(self) -> StaticNetwork {
        self.inner
    }
}
