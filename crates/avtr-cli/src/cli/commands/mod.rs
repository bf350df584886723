//! CLI command handlers, one per file.

mod completions;
mod config;
mod man;
mod url;

pub use completions::run_completions;
pub use config::run_config;
pub use man::run_man;
pub use url::{run_url, UrlArgs};
