pub mod completions;
pub mod generate;
pub mod init;

use clap::{Parser, Subcommand};

/// pwa-icons - Procedural icon set generator for progressive web apps
#[derive(Parser, Debug)]
#[command(name = "pwa-icons")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `generate` run
    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the primary icons and shortcut icons (default)
    Generate(generate::GenerateArgs),

    /// Write a starter icons.yaml with the built-in defaults
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// The subcommand to run, falling back to `generate` with top-level flags.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Generate(self.generate))
    }
}
