//! Transit-network route planning.
//!
//! Computes multi-hop travel routes between named waypoints ("transit
//! nodes") in a world-spanning travel network, and answers reachability
//! queries over it. The graph is built once from static link records and is
//! immutable afterwards; every query filters its result by the traveler's
//! faction and gating conditions.

pub mod data;
pub mod domain;
pub mod graph;
pub mod planner;
