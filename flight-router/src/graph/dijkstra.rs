//! Single-source shortest paths over non-negative edge weights.

use super::digraph::WeightedDigraph;
use super::edge::{DirectedEdge, Vertex};
use super::index_pq::IndexMinPq;

/// Error from shortest-path construction.
///
/// Both variants signal configuration or data errors: a well-formed transit
/// graph never triggers them, so they fail the search invocation fast rather
/// than risk a silently wrong route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// An edge weight was negative or NaN; the greedy settling argument
    /// requires non-negative weights, so the search refuses to run.
    #[error("edge {origin} -> {target} has invalid weight {weight}")]
    NegativeWeight {
        origin: Vertex,
        target: Vertex,
        weight: f64,
    },

    /// The source vertex does not exist in the graph.
    #[error("source vertex {origin} out of range for a graph with {vertices} vertices")]
    SourceOutOfRange { origin: Vertex, vertices: usize },
}

/// Shortest paths from a single source, computed by Dijkstra's algorithm.
///
/// One value covers one immutable `(graph, source)` pair; there is no
/// incremental re-run. Construction does all the work, queries are O(1)
/// lookups plus path reconstruction.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: Vertex,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl ShortestPaths {
    /// Run the search from `source`.
    ///
    /// Every edge weight in the graph is validated as non-negative before
    /// any relaxation happens; a bad weight fails the whole invocation.
    pub fn new(graph: &WeightedDigraph, source: Vertex) -> Result<Self, SearchError> {
        let vertices = graph.vertices();
        if source >= vertices {
            return Err(SearchError::SourceOutOfRange {
                origin: source,
                vertices,
            });
        }
        for edge in graph.edges() {
            if !(edge.weight() >= 0.0) {
                return Err(SearchError::NegativeWeight {
                    origin: edge.source(),
                    target: edge.target(),
                    weight: edge.weight(),
                });
            }
        }

        let mut dist_to = vec![f64::INFINITY; vertices];
        let mut edge_to: Vec<Option<DirectedEdge>> = vec![None; vertices];
        dist_to[source] = 0.0;

        let mut pq = IndexMinPq::new(vertices);
        pq.insert(source, 0.0);
        while let Some(v) = pq.del_min() {
            for edge in graph.adjacent(v) {
                let w = edge.target();
                let candidate = dist_to[v] + edge.weight();
                if candidate < dist_to[w] {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(*edge);
                    if pq.contains(w) {
                        pq.decrease_key(w, candidate);
                    } else {
                        pq.insert(w, candidate);
                    }
                }
            }
        }

        Ok(Self {
            source,
            dist_to,
            edge_to,
        })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Accumulated weight of the best path to `v`; `INFINITY` when `v` was
    /// not reached.
    pub fn dist_to(&self, v: Vertex) -> f64 {
        self.dist_to[v]
    }

    pub fn has_path_to(&self, v: Vertex) -> bool {
        self.dist_to[v] < f64::INFINITY
    }

    /// Edges of the best path from the source to `v`, in travel order.
    ///
    /// `None` when `v` is unreachable; an empty chain when `v` is the
    /// source itself.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<DirectedEdge>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = v;
        while let Some(edge) = self.edge_to[current] {
            path.push(edge);
            current = edge.source();
        }
        path.reverse();
        Some(path)
    }

    /// Verify the optimality conditions of a completed search.
    ///
    /// Checks that the source has distance zero and no predecessor, that no
    /// edge in the graph is still relaxable, and that every predecessor edge
    /// is consistent with the distances it produced. Pure verification for
    /// tests; a passing search always satisfies it.
    pub fn check(&self, graph: &WeightedDigraph) -> bool {
        if self.dist_to[self.source] != 0.0 || self.edge_to[self.source].is_some() {
            return false;
        }
        for v in 0..graph.vertices() {
            if v == self.source {
                continue;
            }
            if self.edge_to[v].is_none() && self.dist_to[v] != f64::INFINITY {
                return false;
            }
        }
        // No edge may offer an improvement over the computed distances.
        for edge in graph.edges() {
            if self.dist_to[edge.source()] + edge.weight() < self.dist_to[edge.target()] {
                return false;
            }
        }
        // Every predecessor edge must be exactly tight.
        for (w, edge) in self.edge_to.iter().enumerate() {
            let Some(edge) = edge else { continue };
            if edge.target() != w {
                return false;
            }
            if self.dist_to[edge.source()] + edge.weight() != self.dist_to[w] {
                return false;
            }
        }
        true
    }
}
