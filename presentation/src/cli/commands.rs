//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for boardroom
#[derive(Parser, Debug)]
#[command(name = "boardroom")]
#[command(author, version, about = "Sala de Juntas - converse with a board of AI executives")]
#[command(long_about = r#"
Boardroom seats you, the CEO, at a table with four AI executives
(CFO, CTO, CIO, CDO). A moderator model decides who answers each of
your messages; executives join the table as the conversation summons
them, and can raise a hand to reply on a later turn.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./boardroom.toml    Project-level config
3. ~/.config/boardroom/config.toml   Global config

Example:
  boardroom --chat --company "Acme" --industry Retail --country Chile
  boardroom "Our margins dropped this quarter"
"#)]
pub struct Cli {
    /// Message for a single boardroom turn (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Company name for the session profile
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Industry for the session profile
    #[arg(long, value_name = "INDUSTRY")]
    pub industry: Option<String>,

    /// Country for the session profile
    #[arg(long, value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Model to use for both the moderator and the executives
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the deliberation spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
