mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // stderr keeps stdout clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Status => commands::status::run(),
        Commands::Complete {
            category,
            score,
            seconds,
        } => commands::complete::run(&category, score, seconds),
        Commands::Recommend => commands::recommend::run(),
        Commands::Hunt {
            file,
            sample_every,
            smooth,
        } => commands::hunt::run(file.as_deref(), sample_every, smooth),
        Commands::History { stats } => commands::history::run(stats),
        Commands::Reset { yes } => commands::reset::run(yes),
        Commands::Version => commands::version::run(),
    }
}
