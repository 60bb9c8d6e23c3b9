//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for zar-chat
#[derive(Parser, Debug)]
#[command(name = "zar-chat")]
#[command(author, version, about = "Terminal chat widget for the ZAR assistant")]
#[command(long_about = r#"
zar-chat relays your messages to a ZAR chat backend (POST /api/chat)
and prints the replies.

Configuration files are loaded from (in priority order):
1. ZAR_* environment variables   e.g. ZAR_SERVER__ENDPOINT
2. --config <path>               Explicit config file
3. ./zar.toml                    Project-level config
4. ~/.config/zar-chat/config.toml   Global config

Example:
  zar-chat
  zar-chat --endpoint https://zar.example.com
  zar-chat "Qual o lead time médio do comprador João?"
"#)]
pub struct Cli {
    /// Send a single message and exit instead of starting the REPL
    pub message: Option<String>,

    /// Base URL of the chat backend
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

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
