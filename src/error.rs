// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph construction and queries

use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the graph store and the queries built on it.
///
/// "No path" is deliberately not here: a vertex being unreachable from
/// the current center is an expected answer, reported as `None` by the
/// path and separation queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation required a vertex that is not in the graph
    /// (edge endpoint, traversal source, recenter target).
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// A label lookup named an ordered pair with no edge between it.
    #[error("edge not found: {0} -> {1}")]
    EdgeNotFound(String, String),

    /// Average separation is undefined on a tree with no vertices
    /// beyond its root.
    #[error("tree has no vertices beyond its root, average separation is undefined")]
    DegenerateTree,
}

impl GraphError {
    /// Build a `VertexNotFound` from any vertex identity.
    pub fn vertex_not_found(v: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound(format!("{v:?}"))
    }

    /// Build an `EdgeNotFound` from the ordered endpoint pair.
    pub fn edge_not_found(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::EdgeNotFound(format!("{from:?}"), format!("{to:?}"))
    }
}
