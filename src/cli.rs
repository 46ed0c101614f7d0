use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pattern_trace::Algorithm;

#[derive(Parser)]
#[command(
  name = "pattern-trace",
  about = "Step-by-step traces of KMP and Boyer-Moore substring search",
  version
)]
pub struct Cli {
  /// TOML config file
  #[arg(short, long, global = true)]
  pub config: Option<PathBuf>,

  /// Log engine and playback activity (repeat for more)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Args)]
pub struct Inputs {
  /// Text to search in
  #[arg(short, long)]
  pub text: String,

  /// Pattern to search for
  #[arg(short, long)]
  pub pattern: String,

  /// kmp or boyer-moore (defaults to the config file's choice)
  #[arg(short, long)]
  pub algorithm: Option<Algorithm>,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Print the full trace of one search
  Trace {
    #[command(flatten)]
    inputs: Inputs,

    /// Print the search result as JSON instead of tables
    #[arg(long)]
    json: bool,
  },

  /// Replay a trace step by step in real time
  Play {
    #[command(flatten)]
    inputs: Inputs,

    /// Steps per second
    #[arg(short, long)]
    speed: Option<f64>,
  },

  /// Run both engines and the brute-force reference on the same inputs
  Compare {
    /// Text to search in
    #[arg(short, long)]
    text: String,

    /// Pattern to search for
    #[arg(short, long)]
    pattern: String,
  },
}
