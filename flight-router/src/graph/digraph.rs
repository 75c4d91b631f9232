//! Append-only adjacency-list digraph.

use std::collections::VecDeque;

use super::edge::{DirectedEdge, Vertex};

/// A sparse directed multigraph with weighted edges.
///
/// Vertices are `0..vertices()`, fixed at construction. Edges can only be
/// appended, never removed, and parallel edges between the same ordered pair
/// are allowed; the search finds the cheaper one on its own. After the
/// one-time construction phase the graph is treated as immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedDigraph {
    adj: Vec<Vec<DirectedEdge>>,
    edge_count: usize,
}

impl WeightedDigraph {
    /// Create a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    pub fn vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Append an edge to its source vertex's adjacency list.
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, edge: DirectedEdge) {
        assert!(
            edge.source() < self.adj.len(),
            "edge source {} out of range",
            edge.source()
        );
        assert!(
            edge.target() < self.adj.len(),
            "edge target {} out of range",
            edge.target()
        );
        self.adj[edge.source()].push(edge);
        self.edge_count += 1;
    }

    /// Edges leaving `v`, in append order.
    pub fn adjacent(&self, v: Vertex) -> impl Iterator<Item = &DirectedEdge> {
        self.adj[v].iter()
    }

    /// Number of edges leaving `v`.
    pub fn out_degree(&self, v: Vertex) -> usize {
        self.adj[v].len()
    }

    /// All edges, grouped by source vertex in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.adj.iter().flat_map(|list| list.iter())
    }

    /// Vertices reachable from `source`, including `source` itself.
    ///
    /// Breadth-first; each vertex is yielded exactly once. Only reachability
    /// is guaranteed, not any particular visit order beyond source-first.
    /// The traversal is pure: callers that want a bitmask or visit action
    /// apply it to the yielded vertices themselves.
    ///
    /// Panics if `source` is out of range.
    pub fn reachable_from(&self, source: Vertex) -> ReachableVertices<'_> {
        assert!(source < self.adj.len(), "source {source} out of range");
        let mut visited = vec![false; self.adj.len()];
        visited[source] = true;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        ReachableVertices {
            graph: self,
            queue,
            visited,
        }
    }
}

/// Iterator over the vertices reachable from a source vertex.
///
/// Created by [`WeightedDigraph::reachable_from`].
#[derive(Debug)]
pub struct ReachableVertices<'a> {
    graph: &'a WeightedDigraph,
    queue: VecDeque<Vertex>,
    visited: Vec<bool>,
}

impl Iterator for ReachableVertices<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let v = self.queue.pop_front()?;
        for edge in self.graph.adjacent(v) {
            let w = edge.target();
            if !self.visited[w] {
                self.visited[w] = true;
                self.queue.push_back(w);
            }
        }
        Some(v)
    }
}
