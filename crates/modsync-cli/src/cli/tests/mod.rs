//! CLI parse and context tests.

use super::{build_context, Cli, CliCommand};
use clap::Parser;
use modsync_core::config::ModsyncConfig;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_defaults_to_no_command() {
    let cli = parse(&["modsync"]);
    assert!(cli.command.is_none());
    assert!(cli.host.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.no_pause);
}

#[test]
fn cli_parse_subcommands() {
    assert_eq!(parse(&["modsync", "sync"]).command, Some(CliCommand::Sync));
    assert_eq!(parse(&["modsync", "list"]).command, Some(CliCommand::List));
    assert_eq!(parse(&["modsync", "check"]).command, Some(CliCommand::Check));
    assert_eq!(
        parse(&["modsync", "config-path"]).command,
        Some(CliCommand::ConfigPath)
    );
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = parse(&[
        "modsync",
        "check",
        "--host",
        "10.0.0.5:8080",
        "--mods-dir",
        "/games/mc/mods",
        "--config",
        "custom.toml",
        "--no-pause",
    ]);
    assert_eq!(cli.command, Some(CliCommand::Check));
    assert_eq!(cli.host.as_deref(), Some("10.0.0.5:8080"));
    assert_eq!(cli.mods_dir.as_deref(), Some(Path::new("/games/mc/mods")));
    assert_eq!(cli.config.as_deref(), Some(Path::new("custom.toml")));
    assert!(cli.no_pause);
}

#[test]
fn cli_parse_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["modsync", "upload"]).is_err());
}

#[test]
fn context_needs_a_host() {
    let cfg = ModsyncConfig::default();
    assert!(build_context(&cfg, None, None).is_none());
    assert!(build_context(&cfg, Some("  "), None).is_none());
}

#[test]
fn context_from_config() {
    let mut cfg = ModsyncConfig::default();
    cfg.general.host = "mods.example.net".to_string();
    let ctx = build_context(&cfg, None, None).unwrap();
    assert_eq!(ctx.host, "mods.example.net");
    assert_eq!(ctx.mods_dir, PathBuf::from(".minecraft/mods"));
}

#[test]
fn command_line_overrides_config() {
    let mut cfg = ModsyncConfig::default();
    cfg.general.host = "from-config".to_string();
    let ctx = build_context(&cfg, Some("from-flag:9000"), Some(Path::new("elsewhere"))).unwrap();
    assert_eq!(ctx.host, "from-flag:9000");
    assert_eq!(ctx.mods_dir, PathBuf::from("elsewhere"));
}
