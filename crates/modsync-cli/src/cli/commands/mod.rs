//! CLI command handlers, one per file.

mod check;
mod config_path;
mod list;
mod sync;

pub use check::run_check;
pub use config_path::run_config_path;
pub use list::run_list;
pub use sync::run_sync;
