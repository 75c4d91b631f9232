//! Unit tests for the route planner.

use crate::data::{StaticNetwork, StaticNetworkBuilder};
use crate::domain::{
    ConditionId, Faction, FactionFlags, LinkId, MapId, NodeId, PathWaypoint, Position, TransitNode,
};

use super::{PlannerConfig, RouteError, RoutePlanner, Traveler, default_link_filter};

fn node_id(raw: u32) -> NodeId {
    NodeId::new(raw).unwrap()
}

fn wp(x: f32, y: f32) -> PathWaypoint {
    PathWaypoint::new(Position::new(x, y), MapId(0))
}

/// Waypoint pair producing a link of the given planar length.
fn span(length: f32) -> Vec<PathWaypoint> {
    vec![wp(0.0, 0.0), wp(length, 0.0)]
}

fn both(raw: u32) -> TransitNode {
    TransitNode::new(node_id(raw), FactionFlags::BOTH)
}

/// Traveler with a fixed faction and an explicit set of satisfied conditions.
struct TestTraveler {
    faction: Faction,
    satisfied: Vec<ConditionId>,
}

impl TestTraveler {
    fn league() -> Self {
        Self {
            faction: Faction::League,
            satisfied: Vec::new(),
        }
    }

    fn syndicate() -> Self {
        Self {
            faction: Faction::Syndicate,
            satisfied: Vec::new(),
        }
    }

    fn satisfying(mut self, condition: ConditionId) -> Self {
        self.satisfied.push(condition);
        self
    }
}

impl Traveler for TestTraveler {
    fn faction(&self) -> Faction {
        self.faction
    }

    fn satisfies(&self, condition: ConditionId) -> bool {
        self.satisfied.contains(&condition)
    }
}

fn built(network: &StaticNetwork) -> RoutePlanner {
    let mut planner = RoutePlanner::new(PlannerConfig::default());
    planner.initialize(network, default_link_filter);
    planner
}

#[test]
fn direct_link_short_circuits_the_search() {
    // Direct 1 -> 2 is long; the detour through 3 would be far cheaper.
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .node(both(3))
        .direct_link(LinkId(10), node_id(1), node_id(2), span(100.0))
        .link(LinkId(11), node_id(1), node_id(3), span(1.0))
        .link(LinkId(12), node_id(3), node_id(2), span(1.0))
        .build();
    let planner = built(&network);

    let route = planner
        .complete_route(&network, node_id(1), node_id(2), &TestTraveler::league())
        .unwrap();
    assert_eq!(route, vec![node_id(1), node_id(2)]);
}

#[test]
fn multi_hop_route_follows_the_cheapest_path() {
    // 1 -> 2 -> 4 costs 8, the single link 1 -> 4 costs 10.
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .node(both(4))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(2), node_id(4), span(3.0))
        .link(LinkId(12), node_id(1), node_id(4), span(10.0))
        .build();
    let planner = built(&network);

    let route = planner
        .complete_route(&network, node_id(1), node_id(4), &TestTraveler::league())
        .unwrap();
    assert_eq!(route, vec![node_id(1), node_id(2), node_id(4)]);
}

#[test]
fn no_path_yields_origin_only() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .build();
    let planner = built(&network);

    // The only edge points the other way.
    let route = planner
        .complete_route(&network, node_id(2), node_id(1), &TestTraveler::league())
        .unwrap();
    assert_eq!(route, vec![node_id(2)]);
}

#[test]
fn unknown_node_is_reported_not_panicked() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .build();
    let planner = built(&network);

    let err = planner
        .complete_route(&network, node_id(1), node_id(9), &TestTraveler::league())
        .unwrap_err();
    assert_eq!(err, RouteError::UnknownNode(node_id(9)));

    let err = planner
        .reachable_nodes(&network, node_id(9), &TestTraveler::league())
        .unwrap_err();
    assert_eq!(err, RouteError::UnknownNode(node_id(9)));
}

#[test]
fn wrong_faction_nodes_are_skipped_from_the_route() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(TransitNode::new(node_id(2), FactionFlags::SYNDICATE))
        .node(both(3))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(2), node_id(3), span(5.0))
        .build();
    let planner = built(&network);

    let route = planner
        .complete_route(&network, node_id(1), node_id(3), &TestTraveler::league())
        .unwrap();
    assert_eq!(route, vec![node_id(1), node_id(3)]);

    // The syndicate traveler sees the intermediate node.
    let route = planner
        .complete_route(&network, node_id(1), node_id(3), &TestTraveler::syndicate())
        .unwrap();
    assert_eq!(route, vec![node_id(1), node_id(2), node_id(3)]);
}

#[test]
fn gated_nodes_require_the_condition() {
    let condition = ConditionId(40);
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2).with_condition(condition))
        .node(both(3))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(2), node_id(3), span(5.0))
        .build();
    let planner = built(&network);

    let route = planner
        .complete_route(&network, node_id(1), node_id(3), &TestTraveler::league())
        .unwrap();
    assert_eq!(route, vec![node_id(1), node_id(3)]);

    let route = planner
        .complete_route(
            &network,
            node_id(1),
            node_id(3),
            &TestTraveler::league().satisfying(condition),
        )
        .unwrap();
    assert_eq!(route, vec![node_id(1), node_id(2), node_id(3)]);
}

#[test]
fn route_length_matches_route() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .build();
    let planner = built(&network);
    let traveler = TestTraveler::league();

    let route = planner
        .complete_route(&network, node_id(1), node_id(2), &traveler)
        .unwrap();
    let length = planner
        .node_route_length(&network, node_id(1), node_id(2), &traveler)
        .unwrap();
    assert_eq!(length, route.len());
}

#[test]
fn initialize_twice_builds_the_same_graph() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .build();

    let mut planner = RoutePlanner::new(PlannerConfig::default());
    planner.initialize(&network, default_link_filter);
    assert!(planner.is_built());
    let first = planner.graph().clone();
    let vertex = planner.vertex(node_id(1));

    // A second call, even against different data, must change nothing.
    let other = StaticNetworkBuilder::new().build();
    planner.initialize(&other, default_link_filter);
    assert_eq!(planner.graph(), &first);
    assert_eq!(planner.vertex(node_id(1)), vertex);
}

#[test]
fn self_links_produce_no_vertices() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .link(LinkId(10), node_id(1), node_id(1), span(5.0))
        .build();
    let planner = built(&network);
    assert_eq!(planner.graph().vertices(), 0);
    assert_eq!(planner.vertex(node_id(1)), None);
}

#[test]
fn links_with_missing_endpoint_records_are_dropped() {
    // Node 3 has no record; only the 1 -> 2 link survives.
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(1), node_id(3), span(5.0))
        .build();
    let planner = built(&network);
    assert_eq!(planner.graph().vertices(), 2);
    assert_eq!(planner.graph().edge_count(), 1);
    assert_eq!(planner.vertex(node_id(3)), None);
}

#[test]
fn default_filter_rejects_links_between_unflagged_nodes() {
    let network = StaticNetworkBuilder::new()
        .node(TransitNode::new(node_id(1), FactionFlags::NONE))
        .node(TransitNode::new(node_id(2), FactionFlags::NONE))
        .node(both(3))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(2), node_id(3), span(5.0))
        .build();
    let planner = built(&network);

    // Only the link with a flagged endpoint was accepted.
    assert_eq!(planner.graph().edge_count(), 1);
    assert_eq!(planner.vertex(node_id(1)), None);
    assert!(planner.vertex(node_id(2)).is_some());
    assert!(planner.vertex(node_id(3)).is_some());
}

#[test]
fn short_paths_get_the_fallback_weight() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), vec![wp(0.0, 0.0)])
        .build();
    let planner = built(&network);

    let weights: Vec<f64> = planner.graph().edges().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![f64::from(0xFFFFu32)]);
}

#[test]
fn teleport_and_map_transition_segments_cover_no_distance() {
    let teleporting = vec![wp(0.0, 0.0), wp(30.0, 40.0).teleport()];
    let map_crossing = vec![
        wp(0.0, 0.0),
        PathWaypoint::new(Position::new(30.0, 40.0), MapId(1)),
    ];
    let flown = vec![wp(0.0, 0.0), wp(3.0, 4.0), wp(6.0, 8.0)];

    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .node(both(3))
        .node(both(4))
        .link(LinkId(10), node_id(1), node_id(2), teleporting)
        .link(LinkId(11), node_id(1), node_id(3), map_crossing)
        .link(LinkId(12), node_id(1), node_id(4), flown)
        .build();
    let planner = built(&network);

    let weights: Vec<f64> = planner.graph().edges().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![0.0, 0.0, 10.0]);
}

#[test]
fn oversized_link_weights_clamp_instead_of_wrapping() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .link(LinkId(10), node_id(1), node_id(2), span(300.0))
        .build();

    let mut planner = RoutePlanner::new(PlannerConfig {
        fallback_link_weight: 0xFFFF,
        max_link_weight: 100,
    });
    planner.initialize(&network, default_link_filter);

    let weights: Vec<f64> = planner.graph().edges().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![100.0]);
}

#[test]
fn reachability_marks_only_the_travelers_faction() {
    // 1 fans out to a league-only node and a syndicate-only node, and the
    // league branch continues to a shared node.
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(TransitNode::new(node_id(2), FactionFlags::LEAGUE))
        .node(TransitNode::new(node_id(3), FactionFlags::SYNDICATE))
        .node(both(4))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(1), node_id(3), span(5.0))
        .link(LinkId(12), node_id(2), node_id(4), span(5.0))
        .build();
    let planner = built(&network);

    let mask = planner
        .reachable_nodes(&network, node_id(1), &TestTraveler::league())
        .unwrap();
    assert!(mask.contains(node_id(1)));
    assert!(mask.contains(node_id(2)));
    assert!(!mask.contains(node_id(3)));
    assert!(mask.contains(node_id(4)));
    assert_eq!(mask.count(), 3);

    // The syndicate traveler still reaches 4 through the graph, but 2 is
    // not marked for them.
    let mask = planner
        .reachable_nodes(&network, node_id(1), &TestTraveler::syndicate())
        .unwrap();
    assert!(mask.contains(node_id(1)));
    assert!(!mask.contains(node_id(2)));
    assert!(mask.contains(node_id(3)));
    assert!(mask.contains(node_id(4)));
}

#[test]
fn reachability_stops_at_the_connected_component() {
    let network = StaticNetworkBuilder::new()
        .node(both(1))
        .node(both(2))
        .node(both(3))
        .node(both(4))
        .link(LinkId(10), node_id(1), node_id(2), span(5.0))
        .link(LinkId(11), node_id(3), node_id(4), span(5.0))
        .build();
    let planner = built(&network);

    let mask = planner
        .reachable_nodes(&network, node_id(1), &TestTraveler::league())
        .unwrap();
    assert!(mask.contains(node_id(1)));
    assert!(mask.contains(node_id(2)));
    assert!(!mask.contains(node_id(3)));
    assert!(!mask.contains(node_id(4)));
}
