// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Breadth-first shortest-path trees and the metrics derived from them

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// Build the BFS shortest-path tree of `graph` rooted at `source`.
///
/// The result is itself a [`Graph`]: the root has out-degree 0 and
/// every other reached vertex has exactly one outgoing edge pointing
/// at its BFS parent, labeled with the source graph's label for the
/// `(parent, child)` edge. Vertices unreachable from `source` are
/// absent from the tree entirely.
///
/// When several predecessors at the same depth could claim a vertex,
/// the parent is whichever one enumerates it first; that choice
/// follows the neighbor order of `graph` and is deterministic for a
/// fixed insert history.
///
/// Runs in O(V + E) time with O(V) auxiliary space.
///
/// # Errors
///
/// `VertexNotFound` if `source` is not a vertex of `graph`.
pub fn shortest_path_tree<V, E>(graph: &Graph<V, E>, source: &V) -> Result<Graph<V, E>>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Clone,
{
    if !graph.has_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let mut tree = Graph::new();
    tree.insert_vertex(source.clone());

    let mut visited: HashSet<V> = HashSet::from([source.clone()]);
    let mut frontier: VecDeque<V> = VecDeque::from([source.clone()]);

    while let Some(u) = frontier.pop_front() {
        for v in graph.out_neighbors(&u) {
            if visited.insert(v.clone()) {
                frontier.push_back(v.clone());
                tree.insert_vertex(v.clone());
                // child points back at its parent, carrying the
                // source graph's (parent, child) label
                let label = graph.label(&u, v)?.clone();
                tree.insert_directed(v, &u, label)?;
            }
        }
    }

    Ok(tree)
}

/// Path from the tree's root down to `v`, both endpoints included.
///
/// Returns `None` when `v` is not in the tree — no path is an
/// expected answer, not an error. Walks the unique parent chain from
/// `v` up to the out-degree-0 root; the tree is finite and acyclic so
/// the walk always terminates.
pub fn path<V, E>(tree: &Graph<V, E>, v: &V) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    if !tree.has_vertex(v) {
        return None;
    }

    let mut steps = Vec::new();
    let mut current = v.clone();
    while let Some(parent) = tree.out_neighbors(&current).next().cloned() {
        steps.push(current);
        current = parent;
    }
    steps.push(current);
    steps.reverse();
    Some(steps)
}

/// Degree of separation of `v` from the tree's root: the number of
/// edges on its path. `None` is the infinite-separation sentinel for
/// vertices outside the tree.
pub fn separation<V, E>(tree: &Graph<V, E>, v: &V) -> Option<usize>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    path(tree, v).map(|p| p.len() - 1)
}

/// Vertices of `graph` that `tree` does not reach.
///
/// Together with the tree's own vertices this partitions the graph's
/// vertex set.
pub fn missing_vertices<V, E>(graph: &Graph<V, E>, tree: &Graph<V, E>) -> HashSet<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    graph
        .vertices()
        .filter(|v| !tree.has_vertex(v))
        .cloned()
        .collect()
}

/// Mean degree of separation over every non-root vertex of `tree`.
///
/// Computed as a recursive depth sum over the tree: children of a node
/// are its in-neighbors, since tree edges point child -> parent. The
/// recursion depth is bounded by the tree height.
///
/// # Errors
///
/// `VertexNotFound` if `root` is not in the tree; `DegenerateTree`
/// when the tree holds nothing but its root — the mean over zero
/// vertices is undefined and callers must handle it explicitly.
pub fn average_separation<V, E>(tree: &Graph<V, E>, root: &V) -> Result<f64>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    if !tree.has_vertex(root) {
        return Err(GraphError::vertex_not_found(root));
    }
    let others = tree.vertex_count() - 1;
    if others == 0 {
        return Err(GraphError::DegenerateTree);
    }
    Ok(depth_sum(tree, root, 0) as f64 / others as f64)
}

/// Sum of depths of `node` and every vertex below it.
fn depth_sum<V, E>(tree: &Graph<V, E>, node: &V, depth: usize) -> usize
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let mut sum = depth;
    for child in tree.in_neighbors(node) {
        sum += depth_sum(tree, child, depth + 1);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undirected chain a - b - c - ... with single-letter labels
    fn chain(names: &[&'static str]) -> Graph<&'static str, &'static str> {
        let mut g = Graph::new();
        for name in names {
            g.insert_vertex(*name);
        }
        for pair in names.windows(2) {
            g.insert_undirected(&pair[0], &pair[1], "link").unwrap();
        }
        g
    }

    /// Hub connected to every leaf
    fn star(hub: &'static str, leaves: &[&'static str]) -> Graph<&'static str, &'static str> {
        let mut g = Graph::new();
        g.insert_vertex(hub);
        for leaf in leaves {
            g.insert_vertex(*leaf);
            g.insert_undirected(&hub, leaf, "spoke").unwrap();
        }
        g
    }

    #[test]
    fn test_tree_shape_invariants() {
        let g = chain(&["a", "b", "c", "d"]);
        let tree = shortest_path_tree(&g, &"a").unwrap();

        let roots: Vec<_> = tree.vertices().filter(|v| tree.out_degree(v) == 0).collect();
        assert_eq!(roots, vec![&"a"]);
        for v in tree.vertices().filter(|v| **v != "a") {
            assert_eq!(tree.out_degree(v), 1, "non-root {v} must have one parent");
        }
    }

    #[test]
    fn test_tree_distances_match_chain() {
        let g = chain(&["a", "b", "c", "d", "e"]);
        let tree = shortest_path_tree(&g, &"a").unwrap();

        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            assert_eq!(separation(&tree, name), Some(i));
        }
    }

    #[test]
    fn test_tree_copies_labels() {
        let mut g = Graph::new();
        for v in ["a", "b"] {
            g.insert_vertex(v);
        }
        g.insert_undirected(&"a", &"b", "shared").unwrap();

        let tree = shortest_path_tree(&g, &"a").unwrap();
        assert_eq!(*tree.label(&"b", &"a").unwrap(), "shared");
    }

    #[test]
    fn test_tree_excludes_unreachable() {
        let mut g = chain(&["a", "b"]);
        g.insert_vertex("island");

        let tree = shortest_path_tree(&g, &"a").unwrap();
        assert!(!tree.has_vertex(&"island"));
        assert_eq!(tree.vertex_count(), 2);
    }

    #[test]
    fn test_tree_source_must_exist() {
        let g = chain(&["a", "b"]);
        let err = shortest_path_tree(&g, &"ghost").unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound(_)));
    }

    #[test]
    fn test_cycle_terminates_with_shortest_parents() {
        // a - b - c - d - a square: c is two hops from a either way
        let mut g = chain(&["a", "b", "c", "d"]);
        g.insert_undirected(&"d", &"a", "link").unwrap();

        let tree = shortest_path_tree(&g, &"a").unwrap();
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(separation(&tree, &"b"), Some(1));
        assert_eq!(separation(&tree, &"d"), Some(1));
        assert_eq!(separation(&tree, &"c"), Some(2));
    }

    #[test]
    fn test_path_runs_root_first() {
        let g = chain(&["a", "b", "c", "d"]);
        let tree = shortest_path_tree(&g, &"a").unwrap();

        assert_eq!(path(&tree, &"d"), Some(vec!["a", "b", "c", "d"]));
        assert_eq!(path(&tree, &"a"), Some(vec!["a"]));
    }

    #[test]
    fn test_path_missing_vertex_is_none() {
        let mut g = chain(&["a", "b"]);
        g.insert_vertex("island");
        let tree = shortest_path_tree(&g, &"a").unwrap();

        assert_eq!(path(&tree, &"island"), None);
        assert_eq!(separation(&tree, &"island"), None);
        assert_eq!(path(&tree, &"ghost"), None);
    }

    #[test]
    fn test_missing_vertices_partition() {
        let mut g = chain(&["a", "b", "c"]);
        g.insert_vertex("x");
        g.insert_vertex("y");
        g.insert_undirected(&"x", &"y", "link").unwrap();

        let tree = shortest_path_tree(&g, &"a").unwrap();
        let missing = missing_vertices(&g, &tree);

        assert_eq!(missing, HashSet::from(["x", "y"]));
        assert_eq!(missing.len() + tree.vertex_count(), g.vertex_count());
        assert!(tree.vertices().all(|v| !missing.contains(v)));
    }

    #[test]
    fn test_average_separation_star_is_one() {
        let g = star("hub", &["a", "b", "c", "d", "e"]);
        let tree = shortest_path_tree(&g, &"hub").unwrap();

        let avg = average_separation(&tree, &"hub").unwrap();
        assert!((avg - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_separation_chain() {
        // depths 1 + 2 + 3 over three non-root vertices
        let g = chain(&["a", "b", "c", "d"]);
        let tree = shortest_path_tree(&g, &"a").unwrap();

        let avg = average_separation(&tree, &"a").unwrap();
        assert!((avg - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_separation_degenerate_tree() {
        let mut g: Graph<&str, &str> = Graph::new();
        g.insert_vertex("alone");

        let tree = shortest_path_tree(&g, &"alone").unwrap();
        assert_eq!(
            average_separation(&tree, &"alone").unwrap_err(),
            GraphError::DegenerateTree
        );
    }

    #[test]
    fn test_average_separation_unknown_root() {
        let g = chain(&["a", "b"]);
        let tree = shortest_path_tree(&g, &"a").unwrap();
        assert!(matches!(
            average_separation(&tree, &"ghost").unwrap_err(),
            GraphError::VertexNotFound(_)
        ));
    }
}
