// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roster file: `id|name` per line
    pub actors_file: PathBuf,
    /// Groupings file: `id|title` per line
    pub movies_file: PathBuf,
    /// Credits file: `movie_id|actor_id` per line
    pub credits_file: PathBuf,
    /// Initial center of the universe
    pub center: String,
    /// Field delimiter used by all three files
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actors_file: PathBuf::from("inputs/actors.txt"),
            movies_file: PathBuf::from("inputs/movies.txt"),
            credits_file: PathBuf::from("inputs/movie-actors.txt"),
            center: "Kevin Bacon".to_string(),
            delimiter: '|',
        }
    }
}

/// Load configuration: an explicit path is a hard requirement, the
/// platform config file is used when present, defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Platform config file location, e.g. `~/.config/costar/costar.toml`
fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "costar")
        .map(|dirs| dirs.config_dir().join("costar.toml"))
}
