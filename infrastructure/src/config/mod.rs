//! Configuration file loading for boardroom
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./boardroom.toml` or `./.boardroom.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/boardroom/config.toml`
//! 4. Fallback: `~/.config/boardroom/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBoardConfig, FileChatConfig, FileConfig, FileLogConfig, FileOpenAiConfig,
    FileProviderConfig, FileReplConfig, PLACEHOLDER_API_KEY,
};
pub use loader::ConfigLoader;
