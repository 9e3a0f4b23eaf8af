// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Generic labeled graph store with petgraph backing

use crate::error::{GraphError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A directed labeled graph over opaque vertex identities.
///
/// Vertices are the identity type `V` itself; there is no separate
/// vertex record. Each ordered pair of vertices carries at most one
/// edge with a label of type `E`. An "undirected" edge is stored as a
/// symmetric pair of directed edges sharing one label.
///
/// The graph only grows: vertices and edges can be inserted but never
/// removed, so counts always reflect the full insert history.
pub struct Graph<V, E> {
    /// The underlying directed graph
    inner: DiGraph<V, E>,
    /// Map from vertex identity to node index
    indices: HashMap<V, NodeIndex>,
}

impl<V, E> Graph<V, E> {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of directed edges (an undirected insert contributes two)
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// All vertices, in no significant order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.inner.node_weights()
    }
}

impl<V, E> Graph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Add a vertex if absent. Re-insertion is a no-op.
    pub fn insert_vertex(&mut self, v: V) {
        if !self.indices.contains_key(&v) {
            let idx = self.inner.add_node(v.clone());
            self.indices.insert(v, idx);
        }
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Re-inserting an edge for the same ordered pair overwrites the
    /// previous label; the pair never carries more than one edge.
    ///
    /// # Errors
    ///
    /// `VertexNotFound` if either endpoint is absent.
    pub fn insert_directed(&mut self, from: &V, to: &V, label: E) -> Result<()> {
        let f = self.index_of(from)?;
        let t = self.index_of(to)?;
        self.inner.update_edge(f, t, label);
        Ok(())
    }

    /// Add a symmetric pair of directed edges carrying the same label.
    ///
    /// Both endpoints are resolved before anything is inserted, so a
    /// failed insert leaves the graph untouched — callers never
    /// observe only one direction.
    ///
    /// # Errors
    ///
    /// `VertexNotFound` if either endpoint is absent.
    pub fn insert_undirected(&mut self, a: &V, b: &V, label: E) -> Result<()>
    where
        E: Clone,
    {
        let ai = self.index_of(a)?;
        let bi = self.index_of(b)?;
        self.inner.update_edge(ai, bi, label.clone());
        self.inner.update_edge(bi, ai, label);
        Ok(())
    }

    /// Whether `v` is a vertex of this graph
    #[must_use]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.indices.contains_key(v)
    }

    /// Whether the directed edge `from -> to` exists
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.indices.get(from), self.indices.get(to)) {
            (Some(&f), Some(&t)) => self.inner.find_edge(f, t).is_some(),
            _ => false,
        }
    }

    /// Label of the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// `EdgeNotFound` if the ordered pair carries no edge (including
    /// when either endpoint is absent).
    pub fn label(&self, from: &V, to: &V) -> Result<&E> {
        let missing = || GraphError::edge_not_found(from, to);
        let f = self.indices.get(from).ok_or_else(missing)?;
        let t = self.indices.get(to).ok_or_else(missing)?;
        let edge = self.inner.find_edge(*f, *t).ok_or_else(missing)?;
        self.inner.edge_weight(edge).ok_or_else(missing)
    }

    /// Vertices reachable by one outgoing edge from `v`.
    ///
    /// Empty for an absent vertex. The order is deterministic for a
    /// fixed insert history but otherwise unspecified.
    pub fn out_neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.neighbors(v, Direction::Outgoing)
    }

    /// Vertices with one edge pointing at `v`. Empty for an absent vertex.
    pub fn in_neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.neighbors(v, Direction::Incoming)
    }

    /// Number of outgoing edges at `v` (0 for an absent vertex)
    #[must_use]
    pub fn out_degree(&self, v: &V) -> usize {
        self.out_neighbors(v).count()
    }

    /// Number of incoming edges at `v` (0 for an absent vertex)
    #[must_use]
    pub fn in_degree(&self, v: &V) -> usize {
        self.in_neighbors(v).count()
    }

    fn neighbors<'a>(&'a self, v: &V, dir: Direction) -> impl Iterator<Item = &'a V> + 'a {
        self.indices
            .get(v)
            .copied()
            .into_iter()
            .flat_map(move |idx| self.inner.neighbors_directed(idx, dir))
            .map(|idx| &self.inner[idx])
    }

    fn index_of(&self, v: &V) -> Result<NodeIndex> {
        self.indices
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self {
            inner: DiGraph::new(),
            indices: HashMap::new(),
        }
    }
}

impl<V, E> fmt::Debug for Graph<V, E>
where
    V: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.inner.node_count())
            .field("edges", &self.inner.edge_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn letters(graph: &mut Graph<&'static str, u32>, names: &[&'static str]) {
        for name in names {
            graph.insert_vertex(name);
        }
    }

    #[test]
    fn test_insert_vertex_idempotent() {
        let mut g: Graph<&str, u32> = Graph::new();
        g.insert_vertex("a");
        g.insert_vertex("a");
        g.insert_vertex("a");

        assert_eq!(g.vertex_count(), 1);
        assert!(g.has_vertex(&"a"));
    }

    #[test]
    fn test_edge_requires_existing_endpoints() {
        let mut g: Graph<&str, u32> = Graph::new();
        g.insert_vertex("a");

        let err = g.insert_directed(&"a", &"ghost", 1).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound(_)));
        let err = g.insert_directed(&"ghost", &"a", 1).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound(_)));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_undirected_is_symmetric() {
        let mut g: Graph<&str, u32> = Graph::new();
        letters(&mut g, &["a", "b"]);
        g.insert_undirected(&"a", &"b", 7).unwrap();

        assert!(g.has_edge(&"a", &"b"));
        assert!(g.has_edge(&"b", &"a"));
        assert_eq!(g.label(&"a", &"b").unwrap(), g.label(&"b", &"a").unwrap());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_undirected_no_partial_insert() {
        let mut g: Graph<&str, u32> = Graph::new();
        g.insert_vertex("a");

        assert!(g.insert_undirected(&"a", &"ghost", 1).is_err());
        assert!(!g.has_edge(&"a", &"ghost"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_reinsert_overwrites_label() {
        let mut g: Graph<&str, u32> = Graph::new();
        letters(&mut g, &["a", "b"]);

        g.insert_directed(&"a", &"b", 1).unwrap();
        g.insert_directed(&"a", &"b", 2).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(*g.label(&"a", &"b").unwrap(), 2);
    }

    #[test]
    fn test_label_missing_edge() {
        let mut g: Graph<&str, u32> = Graph::new();
        letters(&mut g, &["a", "b"]);

        let err = g.label(&"a", &"b").unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound(_, _)));
        let err = g.label(&"a", &"ghost").unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound(_, _)));
    }

    #[test]
    fn test_neighbors_and_degrees() {
        let mut g: Graph<&str, u32> = Graph::new();
        letters(&mut g, &["hub", "x", "y", "z"]);
        for leaf in ["x", "y", "z"] {
            g.insert_directed(&"hub", &leaf, 1).unwrap();
        }
        g.insert_directed(&"x", &"hub", 1).unwrap();

        let out: HashSet<_> = g.out_neighbors(&"hub").copied().collect();
        assert_eq!(out, HashSet::from(["x", "y", "z"]));
        assert_eq!(g.out_degree(&"hub"), 3);
        assert_eq!(g.in_degree(&"hub"), 1);

        let inn: HashSet<_> = g.in_neighbors(&"x").copied().collect();
        assert_eq!(inn, HashSet::from(["hub"]));
    }

    #[test]
    fn test_absent_vertex_has_no_neighbors() {
        let g: Graph<&str, u32> = Graph::new();
        assert_eq!(g.out_neighbors(&"ghost").count(), 0);
        assert_eq!(g.in_neighbors(&"ghost").count(), 0);
        assert_eq!(g.out_degree(&"ghost"), 0);
        assert_eq!(g.in_degree(&"ghost"), 0);
        assert!(!g.has_edge(&"ghost", &"ghost"));
    }

    #[test]
    fn test_vertices_enumerates_everything() {
        let mut g: Graph<&str, u32> = Graph::new();
        letters(&mut g, &["a", "b", "c"]);

        let all: HashSet<_> = g.vertices().copied().collect();
        assert_eq!(all, HashSet::from(["a", "b", "c"]));
    }

    #[test]
    fn test_undirected_overwrite_keeps_directions_in_step() {
        let mut g: Graph<&str, u32> = Graph::new();
        letters(&mut g, &["a", "b"]);

        g.insert_undirected(&"a", &"b", 1).unwrap();
        g.insert_undirected(&"a", &"b", 9).unwrap();

        assert_eq!(g.edge_count(), 2);
        assert_eq!(*g.label(&"a", &"b").unwrap(), 9);
        assert_eq!(*g.label(&"b", &"a").unwrap(), 9);
    }
}
