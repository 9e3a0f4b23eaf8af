// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Command-line interface definition

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser)]
#[command(name = "costar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "COSTAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Roster file override (`id|name` per line)
    #[arg(long, env = "COSTAR_ACTORS")]
    pub actors: Option<PathBuf>,

    /// Groupings file override (`id|title` per line)
    #[arg(long, env = "COSTAR_MOVIES")]
    pub movies: Option<PathBuf>,

    /// Credits file override (`movie_id|actor_id` per line)
    #[arg(long, env = "COSTAR_CREDITS")]
    pub credits: Option<PathBuf>,

    /// Initial center of the universe override
    #[arg(long)]
    pub center: Option<String>,

    /// Subcommand to run; the interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands; without one, the interactive session starts
#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session over the loaded universe
    Play,

    /// Path from the current center to an actor
    Path {
        /// Actor name
        name: String,
    },

    /// Best (positive) or worst (negative) centers by average separation
    Centers {
        /// How many: positive for the best, negative for the worst
        #[arg(allow_hyphen_values = true)]
        count: i64,
    },

    /// Actors whose number of direct connections lies in a range
    Degree {
        /// Lower bound, inclusive
        low: usize,
        /// Upper bound, inclusive
        high: usize,
    },

    /// Actors whose separation from the center lies in a range
    Separation {
        /// Lower bound, inclusive
        low: usize,
        /// Upper bound, inclusive
        high: usize,
    },

    /// Actors with no connection to the current center
    Unreachable,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Fold the dataset/center flags into a loaded configuration;
    /// flags win over file values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.actors {
            config.actors_file = path.clone();
        }
        if let Some(path) = &self.movies {
            config.movies_file = path.clone();
        }
        if let Some(path) = &self.credits {
            config.credits_file = path.clone();
        }
        if let Some(center) = &self.center {
            config.center = center.clone();
        }
    }
}
