// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(
    cmd: &ConfigCommand,
    config: &Config,
    path: &Path,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(config, path, output, out),
        ConfigCommand::Path => {
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        ConfigCommand::Init { force } => init(config, path, *force, out),
    }
}

/// Saves `config` to `path`; an existing file is kept unless `force`.
fn init(config: &Config, path: &Path, force: bool, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }
    config.save(path)?;
    tracing::debug!(path = %path.display(), "wrote config");
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

fn show(config: &Config, path: &Path, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
                "config": config,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            let source = if path.exists() { "" } else { " (not found, using defaults)" };
            writeln!(out, "# {}{source}", path.display())?;
            let body = toml::to_string_pretty(config).map_err(|e| Error::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            write!(out, "{body}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
