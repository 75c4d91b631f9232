//! Route planning over the static transit network.
//!
//! This module answers: "which transit nodes does a traveler pass through
//! to get from here to there, and which nodes can they reach at all?"
//! The graph is built once from static link records at startup; queries
//! then run against the immutable graph, filtering every result by the
//! traveler's faction and gating conditions.

mod config;
mod mask;
mod provider;
mod route;

#[cfg(test)]
mod route_tests;

pub use config::PlannerConfig;
pub use mask::NodeMask;
pub use provider::{TransitData, Traveler};
pub use route::{RouteError, RoutePlanner, default_link_filter};
