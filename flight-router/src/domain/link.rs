//! Transit links and their flown waypoint paths.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Identifier of a transit-link record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId(pub u32);

/// Identifier of a local map (continent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapId(pub u32);

/// Planar waypoint coordinates.
///
/// Link weights are planar Euclidean lengths, so only the two horizontal
/// coordinates of the original data participate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance to another position.
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// One waypoint along a link's flown path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathWaypoint {
    pub position: Position,
    pub map: MapId,
    /// The segment ending at this waypoint is a teleport and covers no
    /// measurable distance.
    #[serde(default)]
    pub teleport: bool,
}

impl PathWaypoint {
    pub fn new(position: Position, map: MapId) -> Self {
        Self {
            position,
            map,
            teleport: false,
        }
    }

    /// Mark the segment ending here as a teleport.
    pub fn teleport(mut self) -> Self {
        self.teleport = true;
        self
    }
}

/// A directed connection between two transit nodes.
///
/// The network is directed: a logically bidirectional connection appears as
/// two separate link records in static data, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLink {
    pub id: LinkId,
    pub origin: NodeId,
    pub destination: NodeId,
}

impl TransitLink {
    pub fn new(id: LinkId, origin: NodeId, destination: NodeId) -> Self {
        Self {
            id,
            origin,
            destination,
        }
    }
}
