// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dataset ingestion: delimiter-separated roster, grouping, and credit
//! files into a collaboration graph

use crate::graph::Graph;
use anyhow::{Context, Result};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Collaboration graph: people as vertices, the set of shared credit
/// titles as the edge label
pub type CreditGraph = Graph<String, BTreeSet<String>>;

/// Build the collaboration graph from three data files:
///
/// - `actors`: `id<delim>name` per line,
/// - `movies`: `id<delim>title` per line,
/// - `credits`: `movie_id<delim>actor_id` per line.
///
/// Every actor in the roster becomes a vertex, credited or not. Two
/// actors credited on the same title get an undirected edge labeled
/// with every title they share. Malformed lines and credits naming
/// unknown ids are skipped with a warning; an unreadable file is a
/// hard error.
pub fn load_graph(actors: &Path, movies: &Path, credits: &Path, delimiter: char) -> Result<CreditGraph> {
    let actor_names = read_id_map(actors, delimiter)?;
    let movie_titles = read_id_map(movies, delimiter)?;

    // movie id -> credited actor ids, duplicates collapsed
    let mut casts: HashMap<u64, BTreeSet<u64>> = HashMap::new();
    for (line_no, movie_id, actor_id) in read_credit_pairs(credits, delimiter)? {
        if !movie_titles.contains_key(&movie_id) {
            warn!(file = %credits.display(), line = line_no, movie_id, "credit names an unknown movie id, skipping");
            continue;
        }
        if !actor_names.contains_key(&actor_id) {
            warn!(file = %credits.display(), line = line_no, actor_id, "credit names an unknown actor id, skipping");
            continue;
        }
        casts.entry(movie_id).or_default().insert(actor_id);
    }

    let mut graph = Graph::new();
    for name in actor_names.values() {
        graph.insert_vertex(name.clone());
    }

    // collect each pair's shared titles before touching the graph, so
    // every edge is inserted exactly once with its full label
    let mut shared: HashMap<(String, String), BTreeSet<String>> = HashMap::new();
    for (movie_id, cast) in &casts {
        let title = &movie_titles[movie_id];
        let names: Vec<&String> = cast.iter().map(|id| &actor_names[id]).collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if a == b {
                    // two roster ids with the same name collapse onto
                    // one vertex; never self-link it
                    continue;
                }
                let key = if a < b {
                    ((*a).clone(), (*b).clone())
                } else {
                    ((*b).clone(), (*a).clone())
                };
                shared.entry(key).or_default().insert(title.clone());
            }
        }
    }

    let pair_count = shared.len();
    for ((a, b), titles) in shared {
        graph
            .insert_undirected(&a, &b, titles)
            .context("linking credited actors")?;
    }

    debug!(
        vertices = graph.vertex_count(),
        pairs = pair_count,
        "collaboration graph loaded"
    );
    Ok(graph)
}

/// Read an `id<delim>name` file into a map, skipping lines that do not
/// parse.
fn read_id_map(path: &Path, delimiter: char) -> Result<HashMap<u64, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut map = HashMap::new();
    for (line_no, line) in numbered_lines(&content) {
        let Some((id, name)) = line.split_once(delimiter) else {
            warn!(file = %path.display(), line = line_no, "missing delimiter, skipping");
            continue;
        };
        let Ok(id) = id.trim().parse::<u64>() else {
            warn!(file = %path.display(), line = line_no, "unparsable id, skipping");
            continue;
        };
        map.insert(id, name.to_string());
    }
    Ok(map)
}

/// Read a `movie_id<delim>actor_id` file, keeping line numbers for
/// later diagnostics.
fn read_credit_pairs(path: &Path, delimiter: char) -> Result<Vec<(usize, u64, u64)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut pairs = Vec::new();
    for (line_no, line) in numbered_lines(&content) {
        let Some((movie, actor)) = line.split_once(delimiter) else {
            warn!(file = %path.display(), line = line_no, "missing delimiter, skipping");
            continue;
        };
        match (movie.trim().parse::<u64>(), actor.trim().parse::<u64>()) {
            (Ok(movie_id), Ok(actor_id)) => pairs.push((line_no, movie_id, actor_id)),
            _ => {
                warn!(file = %path.display(), line = line_no, "unparsable id pair, skipping");
            }
        }
    }
    Ok(pairs)
}

/// Non-blank lines with their 1-based line numbers
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
