//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

use crate::config::{parse_start_depth, RenderStyle, ThemeSelection};

/// Design pattern demonstrations: abstract factory, composite tree, and strategy
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging to stderr (repeat for more: -d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an in-memory folder tree and render it
    Composite {
        /// Depth of the root line (0-256)
        #[arg(long, value_parser = parse_depth)]
        depth: Option<usize>,
        /// Rendering style
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Spawn themed units through an abstract factory
    Factory {
        /// Faction to spawn
        #[arg(long, value_enum)]
        theme: Option<ThemeSelection>,
    },

    /// Apply an arithmetic strategy to two numbers
    Strategy {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: i64,
        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: i64,
        /// addition, subtraction or multiplication
        action: String,
    },

    /// Run every demo with the effective settings
    All,

    /// Show effective settings as TOML
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn parse_depth(s: &str) -> Result<usize, String> {
    parse_start_depth(s).map_err(|e| e.to_string())
}
