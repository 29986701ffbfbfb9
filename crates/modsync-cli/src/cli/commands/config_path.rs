//! `modsync config-path` – print the config file in use.

use anyhow::Result;
use std::path::Path;

pub fn run_config_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}
