// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Center-relative queries: rankings and filters over a fixed graph

use crate::error::Result;
use crate::graph::Graph;
use crate::traversal::{self, shortest_path_tree};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// A fixed graph paired with a chosen center vertex and the BFS tree
/// rooted there.
///
/// The graph is never mutated once a universe owns it; the only state
/// change is recentering, which swaps the center and its tree as one
/// unit so a query never sees a center without its matching tree.
pub struct Universe<V, E> {
    graph: Graph<V, E>,
    center: V,
    tree: Graph<V, E>,
}

impl<V, E> Universe<V, E>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
    E: Clone,
{
    /// Build a universe centered on `center`.
    ///
    /// # Errors
    ///
    /// `VertexNotFound` if `center` is not in `graph`.
    pub fn new(graph: Graph<V, E>, center: V) -> Result<Self> {
        let tree = shortest_path_tree(&graph, &center)?;
        Ok(Self { graph, center, tree })
    }

    /// Move the center to another vertex, rebuilding the tree.
    ///
    /// On failure the previous center and tree are left untouched.
    ///
    /// # Errors
    ///
    /// `VertexNotFound` if `center` is not in the graph.
    pub fn recenter(&mut self, center: V) -> Result<()> {
        let tree = shortest_path_tree(&self.graph, &center)?;
        self.center = center;
        self.tree = tree;
        Ok(())
    }

    /// The current center vertex
    #[must_use]
    pub fn center(&self) -> &V {
        &self.center
    }

    /// The full graph
    #[must_use]
    pub fn graph(&self) -> &Graph<V, E> {
        &self.graph
    }

    /// The BFS tree rooted at the current center
    #[must_use]
    pub fn tree(&self) -> &Graph<V, E> {
        &self.tree
    }

    /// Number of vertices reachable from the center, excluding the
    /// center itself
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.tree.vertex_count() - 1
    }

    /// Mean separation from the current center over every reachable
    /// vertex.
    ///
    /// # Errors
    ///
    /// `DegenerateTree` when nothing is reachable from the center.
    pub fn average_separation(&self) -> Result<f64> {
        traversal::average_separation(&self.tree, &self.center)
    }

    /// Path from the center to `v`; `None` when `v` is unreachable
    #[must_use]
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        traversal::path(&self.tree, v)
    }

    /// Separation of `v` from the center; `None` when unreachable
    #[must_use]
    pub fn separation(&self, v: &V) -> Option<usize> {
        traversal::separation(&self.tree, v)
    }

    /// Rank every vertex reachable from the current center by the
    /// average separation of its *own* universe — a fresh BFS over the
    /// full graph is rooted at each candidate, which makes this
    /// O(V·(V+E)), by far the most expensive query here.
    ///
    /// `count > 0` returns the best `count` (ascending average);
    /// `count < 0` returns the worst `|count|`, worst first;
    /// `count == 0` returns nothing. Requests beyond the population
    /// are clamped. Ties are broken by vertex order so the result is
    /// deterministic. Vertices with no reachable peers of their own
    /// have no defined average and are skipped.
    #[must_use]
    pub fn rank_centers(&self, count: i64) -> Vec<(V, f64)> {
        if count == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<(V, f64)> = self
            .tree
            .vertices()
            .filter_map(|v| {
                let tree = shortest_path_tree(&self.graph, v).ok()?;
                let avg = traversal::average_separation(&tree, v).ok()?;
                Some((v.clone(), avg))
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let take = (count.unsigned_abs() as usize).min(ranked.len());
        if count > 0 {
            ranked.truncate(take);
            ranked
        } else {
            let mut worst = ranked.split_off(ranked.len() - take);
            worst.reverse();
            worst
        }
    }

    /// Vertices of the full graph whose in-degree (count of direct
    /// partners) lies in `[low, high]`, ascending by degree then by
    /// vertex order.
    #[must_use]
    pub fn filter_by_degree(&self, low: usize, high: usize) -> Vec<(V, usize)> {
        let mut found: Vec<(V, usize)> = self
            .graph
            .vertices()
            .map(|v| (v, self.graph.in_degree(v)))
            .filter(|(_, d)| (low..=high).contains(d))
            .map(|(v, d)| (v.clone(), d))
            .collect();
        found.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        found
    }

    /// Vertices of the current tree whose separation from the center
    /// lies in `[low, high]`, ascending by separation then by vertex
    /// order. Unreachable vertices are not in the tree, so infinite
    /// separation is excluded by construction.
    #[must_use]
    pub fn filter_by_separation(&self, low: usize, high: usize) -> Vec<(V, usize)> {
        let mut found: Vec<(V, usize)> = self
            .tree
            .vertices()
            .filter_map(|v| {
                let sep = traversal::separation(&self.tree, v)?;
                (low..=high).contains(&sep).then(|| (v.clone(), sep))
            })
            .collect();
        found.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        found
    }

    /// Vertices with no connection to the current center, sorted by
    /// vertex order.
    #[must_use]
    pub fn unreachable(&self) -> Vec<V> {
        let mut missing: Vec<V> = traversal::missing_vertices(&self.graph, &self.tree)
            .into_iter()
            .collect();
        missing.sort();
        missing
    }
}

impl<V, E> fmt::Debug for Universe<V, E>
where
    V: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("center", &self.center)
            .field("graph", &self.graph)
            .field("tree", &self.tree)
            .finish()
    }
}
