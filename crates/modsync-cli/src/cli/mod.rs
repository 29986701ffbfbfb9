//! CLI for modsync.

mod commands;
mod pause;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modsync_core::config::{self, ModsyncConfig};
use modsync_core::SyncContext;
use std::path::{Path, PathBuf};

use commands::{run_check, run_config_path, run_list, run_sync};

const PAUSE_PROMPT: &str = "Press any key to continue...";

/// Top-level CLI for modsync.
#[derive(Debug, Parser)]
#[command(name = "modsync")]
#[command(about = "modsync: keep a local mods directory in step with a mod server", long_about = None)]
pub struct Cli {
    /// Config file (default: ./modsync.toml if present, else ~/.config/modsync/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Mod server as host[:port]; overrides the config file.
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Local mods directory; overrides the config file.
    #[arg(long, global = true, value_name = "DIR")]
    pub mods_dir: Option<PathBuf>,

    /// Exit without waiting for a key press.
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Defaults to `sync`.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Download every mod that is missing or out of date.
    Sync,

    /// Print the server's mod listing.
    List,

    /// Show which mods would be downloaded, without downloading.
    Check,

    /// Print the config file path in use.
    ConfigPath,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Runs the command, then waits for a key (unless `--no-pause`), even when the command failed.
    pub fn run(self) -> Result<()> {
        let command = self.command.unwrap_or(CliCommand::Sync);
        let result = self.execute(command);
        if !self.no_pause && command != CliCommand::ConfigPath {
            pause::pause(PAUSE_PROMPT);
        }
        result
    }

    fn execute(&self, command: CliCommand) -> Result<()> {
        let path = config::resolve_path(self.config.as_deref())?;
        if command == CliCommand::ConfigPath {
            return run_config_path(&path);
        }

        let cfg = config::load_or_init(&path)?;
        tracing::debug!("loaded config: {:?}", cfg);

        let Some(ctx) = build_context(&cfg, self.host.as_deref(), self.mods_dir.as_deref()) else {
            println!("No mod server configured. Set `host` under [general] in {}", path.display());
            println!();
            return Ok(());
        };

        match command {
            CliCommand::Sync => run_sync(&ctx),
            CliCommand::List => run_list(&ctx),
            CliCommand::Check => run_check(&ctx),
            CliCommand::ConfigPath => run_config_path(&path),
        }
    }
}

/// Context from config plus command-line overrides. `None` when no host is set anywhere.
fn build_context(
    cfg: &ModsyncConfig,
    host: Option<&str>,
    mods_dir: Option<&Path>,
) -> Option<SyncContext> {
    let host = host
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .or_else(|| cfg.host())?;
    let mods_dir = mods_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cfg.general.mods_dir.clone());
    Some(SyncContext::new(host, mods_dir).with_http(cfg.http_options()))
}

#[cfg(test)]
mod tests;
