//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// lister - Product listings and product chat powered by multimodal AI
#[derive(Parser, Debug)]
#[command(name = "lister")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a product title and description from a photo
    Describe {
        /// Path to the product photo (jpg, jpeg, png, gif, webp)
        image: PathBuf,

        /// Replace the default instruction sent with the photo
        #[arg(short, long)]
        prompt: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Chat with the assistant about your products
    Chat {
        /// Send a single message and exit instead of starting a session
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Run diagnostic checks on the local setup
    Doctor {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
