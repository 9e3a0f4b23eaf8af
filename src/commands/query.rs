// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! One-shot query commands and the report formatting they share with
//! the interactive session

use crate::config::Config;
use crate::ingest;
use crate::universe::Universe;
use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use std::collections::BTreeSet;

/// A universe over the credit dataset: actor names as vertices,
/// shared title sets as edge labels
pub type CreditUniverse = Universe<String, BTreeSet<String>>;

/// Load the configured dataset and center the universe on the
/// configured actor.
pub fn load_universe(config: &Config) -> Result<CreditUniverse> {
    let graph = ingest::load_graph(
        &config.actors_file,
        &config.movies_file,
        &config.credits_file,
        config.delimiter,
    )?;
    Universe::new(graph, config.center.clone())
        .with_context(|| format!("center {:?} is not in the dataset", config.center))
}

/// One-shot `path` command
pub fn path(config: &Config, name: &str) -> Result<()> {
    let universe = load_universe(config)?;
    print_summary(&universe);
    print_path(&universe, name);
    Ok(())
}

/// One-shot `centers` command
pub fn centers(config: &Config, count: i64) -> Result<()> {
    let universe = load_universe(config)?;
    print_summary(&universe);
    print_centers(&universe, count);
    Ok(())
}

/// One-shot `degree` command
pub fn degree(config: &Config, low: usize, high: usize) -> Result<()> {
    let universe = load_universe(config)?;
    print_summary(&universe);
    print_degree(&universe, low, high);
    Ok(())
}

/// One-shot `separation` command
pub fn separation(config: &Config, low: usize, high: usize) -> Result<()> {
    let universe = load_universe(config)?;
    print_summary(&universe);
    print_separation(&universe, low, high);
    Ok(())
}

/// One-shot `unreachable` command
pub fn unreachable(config: &Config) -> Result<()> {
    let universe = load_universe(config)?;
    print_summary(&universe);
    print_unreachable(&universe);
    Ok(())
}

/// One line on who the center is and how connected it is
pub(crate) fn print_summary(universe: &CreditUniverse) {
    let average = match universe.average_separation() {
        Ok(avg) => format!("{avg:.3}"),
        Err(_) => "undefined".to_string(),
    };
    println!(
        "{} is now the center of the universe, connected to {}/{} others (average separation {})",
        universe
            .center()
            .if_supports_color(Stream::Stdout, |center| center.bold()),
        universe.reachable_count(),
        universe.graph().vertex_count() - 1,
        average,
    );
}

/// Path report: the actor's number and one line per hop back to the
/// center, or an explicit infinite-separation notice.
pub(crate) fn print_path(universe: &CreditUniverse, name: &str) {
    let Some(steps) = universe.path_to(&name.to_string()) else {
        println!(
            "{name} has infinite separation from {} (no connection found)",
            universe.center()
        );
        return;
    };

    println!("{name}'s number is {}", steps.len() - 1);
    for pair in steps.windows(2).rev() {
        // the tree edge runs child -> parent
        let titles = universe
            .tree()
            .label(&pair[1], &pair[0])
            .map(format_titles)
            .unwrap_or_default();
        println!("{} appeared in {} with {}", pair[1], titles, pair[0]);
    }
}

/// Ranking report for the best/worst centers
pub(crate) fn print_centers(universe: &CreditUniverse, count: i64) {
    if count == 0 {
        eprintln!("count must be non-zero: positive for the best centers, negative for the worst");
        return;
    }
    let ranked = universe.rank_centers(count);
    if ranked.is_empty() {
        println!("no candidate centers are reachable from {}", universe.center());
        return;
    }
    let what = if count > 0 { "Best" } else { "Worst" };
    println!("{what} {} centers by average separation:", ranked.len());
    for (name, average) in &ranked {
        println!("  {name}  (average separation {average:.3})");
    }
}

/// Degree-range report over the whole graph
pub(crate) fn print_degree(universe: &CreditUniverse, low: usize, high: usize) {
    let found = universe.filter_by_degree(low, high);
    if found.is_empty() {
        println!("no actors with between {low} and {high} direct connections");
        return;
    }
    println!("Actors with between {low} and {high} direct connections:");
    for (name, degree) in &found {
        println!("  {name}  ({degree} direct connections)");
    }
}

/// Separation-range report over the current universe
pub(crate) fn print_separation(universe: &CreditUniverse, low: usize, high: usize) {
    let found = universe.filter_by_separation(low, high);
    if found.is_empty() {
        println!(
            "no actors with separation between {low} and {high} from {}",
            universe.center()
        );
        return;
    }
    println!(
        "Actors with separation between {low} and {high} from {}:",
        universe.center()
    );
    for (name, separation) in &found {
        println!("  {name}  (separation {separation})");
    }
}

/// Everyone the current center cannot reach
pub(crate) fn print_unreachable(universe: &CreditUniverse) {
    let missing = universe.unreachable();
    if missing.is_empty() {
        println!("everyone is connected to {}", universe.center());
        return;
    }
    println!(
        "Actors with infinite separation from {}:",
        universe.center()
    );
    for name in &missing {
        println!("  {name}");
    }
}

/// Render a shared-title set the way the reports print it
fn format_titles(titles: &BTreeSet<String>) -> String {
    let joined = titles.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}
