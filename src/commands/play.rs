// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interactive session: a line-oriented loop over the loaded universe

use super::query::{self, CreditUniverse};
use crate::config::Config;
use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, BufRead, Write};

/// One parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Centers(i64),
    Degree(usize, usize),
    Infinite,
    Path(String),
    Separation(usize, usize),
    Recenter(String),
    Quit,
}

/// Run the interactive session until `q` or end of input.
pub fn run(config: &Config) -> Result<()> {
    let mut universe = query::load_universe(config)?;

    print_banner();
    query::print_summary(&universe);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!(
            "{} > ",
            universe
                .center()
                .if_supports_color(Stream::Stdout, |center| center.bold())
        );
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match parse(&line) {
            Err(complaint) => eprintln!("{complaint}"),
            Ok(Action::Quit) => break,
            Ok(action) => dispatch(&mut universe, action),
        }
    }
    Ok(())
}

fn print_banner() {
    println!(
        "{}",
        "costar - degrees of separation".if_supports_color(Stream::Stdout, |title| title.bold())
    );
    println!();
    println!("Commands:");
    println!("  c <n>            best (n > 0) or worst (n < 0) centers by average separation");
    println!("  d <low> <high>   actors with a number of direct connections in range");
    println!("  i                actors with no connection to the current center");
    println!("  p <name>         path from the current center to <name>");
    println!("  s <low> <high>   actors with separation from the current center in range");
    println!("  u <name>         recenter the universe on <name>");
    println!("  q                quit");
    println!();
}

fn dispatch(universe: &mut CreditUniverse, action: Action) {
    match action {
        Action::Centers(count) => query::print_centers(universe, count),
        Action::Degree(low, high) => query::print_degree(universe, low, high),
        Action::Infinite => query::print_unreachable(universe),
        Action::Path(name) => query::print_path(universe, &name),
        Action::Separation(low, high) => query::print_separation(universe, low, high),
        Action::Recenter(name) => match universe.recenter(name.clone()) {
            Ok(()) => query::print_summary(universe),
            Err(_) => eprintln!("no such actor: {name}"),
        },
        Action::Quit => {}
    }
}

/// Parse one input line. Names may contain spaces, so `p` and `u`
/// take the whole remainder of the line as their argument.
fn parse(line: &str) -> Result<Action, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("empty command (try c, d, i, p, s, u or q)".to_string());
    }
    let (command, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let rest = rest.trim();

    match command {
        "c" => rest
            .parse::<i64>()
            .map(Action::Centers)
            .map_err(|_| "usage: c <n>  (a non-zero integer)".to_string()),
        "d" => parse_range(rest)
            .map(|(low, high)| Action::Degree(low, high))
            .ok_or_else(|| "usage: d <low> <high>".to_string()),
        "i" => Ok(Action::Infinite),
        "p" if !rest.is_empty() => Ok(Action::Path(rest.to_string())),
        "p" => Err("usage: p <name>".to_string()),
        "s" => parse_range(rest)
            .map(|(low, high)| Action::Separation(low, high))
            .ok_or_else(|| "usage: s <low> <high>".to_string()),
        "u" if !rest.is_empty() => Ok(Action::Recenter(rest.to_string())),
        "u" => Err("usage: u <name>".to_string()),
        "q" => Ok(Action::Quit),
        other => Err(format!("unrecognized command {other:?} (try c, d, i, p, s, u or q)")),
    }
}

fn parse_range(rest: &str) -> Option<(usize, usize)> {
    let mut parts = rest.split_whitespace();
    let low = parts.next()?.parse().ok()?;
    let high = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((low, high))
}
