use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "knowquest")]
#[command(version)]
#[command(about = "Object hunts and learning-style recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory with default config and progress
    Init,

    /// Show profile, category scores and the current recommendation
    Status,

    /// Record a finished activity
    Complete {
        /// Category id (visual, auditory, reading, kinesthetic, ...)
        #[arg(short, long)]
        category: String,

        /// Score from 0 to 100
        #[arg(short, long)]
        score: f64,

        /// Seconds spent on the activity
        #[arg(long, default_value_t = 0.0)]
        seconds: f64,
    },

    /// Print the recommended category
    Recommend,

    /// Replay classifier observations through an object hunt
    Hunt {
        /// JSONL of observations (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Only use every Nth observation
        #[arg(long, default_value_t = 1)]
        sample_every: usize,

        /// Majority-vote window over the sampled stream
        #[arg(long)]
        smooth: Option<usize>,
    },

    /// View completion history
    History {
        /// Show per-category totals
        #[arg(long)]
        stats: bool,
    },

    /// Delete all stored progress
    Reset {
        /// Skip the confirmation guard
        #[arg(long)]
        yes: bool,
    },

    /// Print version information
    Version,
}
