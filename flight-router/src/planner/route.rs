//! Route planning over the static transit network.
//!
//! The planner builds the weighted digraph exactly once from static link
//! records, then answers complete-route and reachability queries against it.
//! Queries never mutate the planner, so a built planner can be shared by
//! any number of reader threads; each query allocates its own search state.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::domain::{NodeId, PathWaypoint, TransitNode};
use crate::graph::{DirectedEdge, SearchError, ShortestPaths, Vertex, WeightedDigraph};

use super::config::PlannerConfig;
use super::mask::NodeMask;
use super::provider::{TransitData, Traveler};

/// Error from a route or reachability query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The node id was never assigned a vertex because it appears in no
    /// accepted link. Expected for disconnected or misconfigured static
    /// data; callers treat it like an empty result, not a failure.
    #[error("node {0} is not part of the transit network")]
    UnknownNode(NodeId),

    /// The underlying search rejected the graph data.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Accept a link only when at least one endpoint is visible to some faction.
///
/// The usual data-hygiene predicate for [`RoutePlanner::initialize`]: static
/// data contains decorative nodes flagged for neither faction, and links
/// between two such nodes would only bloat the graph. Callers with different
/// data conventions substitute their own predicate.
pub fn default_link_filter(origin: &TransitNode, destination: &TransitNode) -> bool {
    origin.flags.any() || destination.flags.any()
}

/// Multi-hop route planner over the static transit network.
///
/// Construct once, [`initialize`](Self::initialize) once during startup,
/// then query from anywhere. Re-initialization is a no-op, which makes the
/// one-time-build invariant explicit and testable instead of hiding it in
/// process-wide state.
#[derive(Debug, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
    graph: WeightedDigraph,
    vertex_of: HashMap<NodeId, Vertex>,
    node_at: Vec<NodeId>,
    built: bool,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Whether the graph has been built.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The built transit graph.
    pub fn graph(&self) -> &WeightedDigraph {
        &self.graph
    }

    /// The vertex assigned to a node id, if it appears in any accepted link.
    pub fn vertex(&self, id: NodeId) -> Option<Vertex> {
        self.vertex_of.get(&id).copied()
    }

    /// Build the vertex table and transit graph from `data`.
    ///
    /// Runs at most once; repeat calls are no-ops. `accept` owns the
    /// data-hygiene decision for each link's endpoint pair
    /// ([`default_link_filter`] is the usual choice). Malformed links are
    /// logged and dropped; the rest of the graph stays usable.
    pub fn initialize<D, F>(&mut self, data: &D, accept: F)
    where
        D: TransitData,
        F: Fn(&TransitNode, &TransitNode) -> bool,
    {
        if self.built {
            debug!("transit graph already built, skipping");
            return;
        }

        let mut edges: Vec<DirectedEdge> = Vec::new();
        let mut dropped = 0usize;
        for link in data.links() {
            if link.origin == link.destination {
                trace!(link = link.id.0, "skipping self-link");
                continue;
            }
            let (Some(origin), Some(destination)) =
                (data.node(link.origin), data.node(link.destination))
            else {
                warn!(link = link.id.0, "dropping link with missing endpoint record");
                dropped += 1;
                continue;
            };
            if !accept(origin, destination) {
                trace!(link = link.id.0, "link rejected by filter");
                continue;
            }

            let weight = self.link_weight(data.waypoints(link.id));
            let from = self.vertex_or_insert(link.origin);
            let to = self.vertex_or_insert(link.destination);
            edges.push(DirectedEdge::new(from, to, weight));
        }

        let mut graph = WeightedDigraph::new(self.node_at.len());
        for edge in edges {
            graph.add_edge(edge);
        }
        self.graph = graph;
        self.built = true;
        debug!(
            vertices = self.graph.vertices(),
            edges = self.graph.edge_count(),
            dropped,
            "transit graph built"
        );
    }

    /// Compute the visible route from `from` to `to` for `traveler`.
    ///
    /// A direct link always wins: when the data source reports one, the
    /// result is exactly `[from, to]` without running the search, even if a
    /// cheaper multi-hop path exists — clients expect the direct connection
    /// and the detour would only look broken. Otherwise the weighted search
    /// runs from `from`; every node along the best path that the traveler
    /// cannot see (wrong faction, unsatisfied gating condition, missing
    /// record) is skipped, and the rest are returned in path order after the
    /// initial `from`. No path at all yields just `[from]`.
    pub fn complete_route<D, T>(
        &self,
        data: &D,
        from: NodeId,
        to: NodeId,
        traveler: &T,
    ) -> Result<Vec<NodeId>, RouteError>
    where
        D: TransitData,
        T: Traveler,
    {
        if let Some(link) = data.direct_link(from, to) {
            trace!(
                from = from.get(),
                to = to.get(),
                link = link.0,
                "direct link, search skipped"
            );
            return Ok(vec![from, to]);
        }

        let source = self.vertex(from).ok_or(RouteError::UnknownNode(from))?;
        let target = self.vertex(to).ok_or(RouteError::UnknownNode(to))?;

        let search = ShortestPaths::new(&self.graph, source)?;
        let mut route = vec![from];
        if let Some(path) = search.path_to(target) {
            for edge in &path {
                let id = self.node_at[edge.target()];
                if Self::visible(data, id, traveler) {
                    route.push(id);
                }
            }
        }
        debug!(
            from = from.get(),
            to = to.get(),
            nodes = route.len(),
            "route computed"
        );
        Ok(route)
    }

    /// Length of the visible route from `from` to `to`.
    ///
    /// Thin wrapper over [`complete_route`](Self::complete_route) for
    /// callers that only need the count.
    pub fn node_route_length<D, T>(
        &self,
        data: &D,
        from: NodeId,
        to: NodeId,
        traveler: &T,
    ) -> Result<usize, RouteError>
    where
        D: TransitData,
        T: Traveler,
    {
        self.complete_route(data, from, to, traveler)
            .map(|route| route.len())
    }

    /// Mark every node reachable from `from` and visible to `traveler`.
    ///
    /// Traverses the graph for reachability only; distances play no part.
    /// The returned mask has one bit per 1-indexed node id.
    pub fn reachable_nodes<D, T>(
        &self,
        data: &D,
        from: NodeId,
        traveler: &T,
    ) -> Result<NodeMask, RouteError>
    where
        D: TransitData,
        T: Traveler,
    {
        let source = self.vertex(from).ok_or(RouteError::UnknownNode(from))?;
        let mut mask = NodeMask::new();
        for v in self.graph.reachable_from(source) {
            let id = self.node_at[v];
            if Self::visible(data, id, traveler) {
                mask.set(id);
            }
        }
        debug!(from = from.get(), reachable = mask.count(), "reachability computed");
        Ok(mask)
    }

    /// Whether `traveler` may see the node at all.
    fn visible<D, T>(data: &D, id: NodeId, traveler: &T) -> bool
    where
        D: TransitData,
        T: Traveler,
    {
        let Some(node) = data.node(id) else {
            return false;
        };
        if !node.visible_to(traveler.faction()) {
            return false;
        }
        match node.condition {
            Some(condition) => traveler.satisfies(condition),
            None => true,
        }
    }

    /// Scalar weight for one link's flown path.
    ///
    /// Fewer than two waypoints means no measurable length, so the fallback
    /// applies. Otherwise the planar Euclidean length accumulates over
    /// consecutive waypoints, except across map transitions and teleport
    /// segments, which cover no distance. The result is rounded and clamped
    /// into the configured integer range, saturating instead of wrapping.
    fn link_weight(&self, waypoints: &[PathWaypoint]) -> f64 {
        if waypoints.len() < 2 {
            return f64::from(self.config.fallback_link_weight);
        }
        let mut length = 0.0f64;
        for pair in waypoints.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.map != b.map || b.teleport {
                continue;
            }
            length += a.position.distance_to(b.position);
        }
        let clamped = (length.round() as u64).min(u64::from(self.config.max_link_weight));
        clamped as f64
    }

    /// Vertex for `id`, assigning the next index on first encounter.
    fn vertex_or_insert(&mut self, id: NodeId) -> Vertex {
        *self.vertex_of.entry(id).or_insert_with(|| {
            self.node_at.push(id);
            self.node_at.len() - 1
        })
    }
}
