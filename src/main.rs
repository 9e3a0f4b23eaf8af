// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! costar CLI - degrees-of-separation explorer for collaboration graphs

use anyhow::Result;
use clap::Parser;
use costar::cli::{Cli, Commands};
use costar::{commands, config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let mut config = config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    // Execute command
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(&config),
        Commands::Path { ref name } => commands::query::path(&config, name),
        Commands::Centers { count } => commands::query::centers(&config, count),
        Commands::Degree { low, high } => commands::query::degree(&config, low, high),
        Commands::Separation { low, high } => commands::query::separation(&config, low, high),
        Commands::Unreachable => commands::query::unreachable(&config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}
