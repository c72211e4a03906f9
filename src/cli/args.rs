//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Query binary trees given in pre-order text form, e.g. `1,2,null,null,3,null,null,`
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short = 'c', long = "config", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print minimum and maximum root-to-leaf depth
    Depth {
        /// Serialized tree, or - to read stdin
        tree: String,
    },

    /// Print the maximum path sum
    MaxSum {
        /// Serialized tree, or - to read stdin
        tree: String,
    },

    /// Print the smallest value strictly greater than BOUND
    NextLarger {
        /// Serialized tree, or - to read stdin
        tree: String,
        #[arg(allow_negative_numbers = true)]
        bound: i64,
    },

    /// Check whether two nodes are cousins
    Cousins {
        /// Serialized tree, or - to read stdin
        tree: String,
        /// Path of the first node as L/R steps from the root ("" for the root)
        a: String,
        /// Path of the second node
        b: String,
    },

    /// Print the lowest common ancestor of two nodes
    Lca {
        /// Serialized tree, or - to read stdin
        tree: String,
        /// Path of the first node as L/R steps from the root ("" for the root)
        a: String,
        /// Path of the second node
        b: String,
    },

    /// Draw the tree
    Show {
        /// Serialized tree, or - to read stdin
        tree: String,
    },

    /// Validate and re-serialize a tree in canonical form
    Normalize {
        /// Serialized tree, or - to read stdin
        tree: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show global config file location
    Path,
}
