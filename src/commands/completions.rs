// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shell completion generation

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Write completions for `shell` to stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "costar", &mut std::io::stdout());
    Ok(())
}
