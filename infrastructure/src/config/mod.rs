//! Configuration file loading for watchparty
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WATCHPARTY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./watchparty.toml` or `./.watchparty.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/watchparty/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FilePollConfig, FileProposalsConfig, FileStorageConfig,
    MAX_POLL_HOURS,
};
pub use loader::ConfigLoader;
