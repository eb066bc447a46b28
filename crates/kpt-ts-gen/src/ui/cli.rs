use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Theme, clap_styles};

#[derive(Parser, Debug)]
#[command(name = "kpt-ts-gen")]
#[command(author, version, about = "Kubernetes schema definitions to TypeScript generator")]
#[command(styles = clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: Theme,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a definitions document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate one TypeScript file per package
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the JSON definitions document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated `<package>.ts` files are written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every definition with its package and kind
  Definitions {
    /// Path to the JSON definitions document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
