use crate::suite::BenchmarkCase;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_bench")]
#[command(about = "Compare implicit and explicit trait dispatch call paths")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every benchmark case with its label and dispatch mechanism
    List,

    /// Invoke every case and check that each returns the loop limit
    Verify {
        /// Number of rounds over all cases
        #[arg(short, long, default_value = "3")]
        rounds: usize,
    },

    /// Run a quick timing comparison across dispatch paths
    Compare {
        /// Calls per case
        #[arg(short, long, default_value = "1000000")]
        iterations: u64,

        /// Restrict the comparison to these cases (repeatable)
        #[arg(short, long = "case")]
        cases: Vec<BenchmarkCase>,

        /// Write the report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },
}
