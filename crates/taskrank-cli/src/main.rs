use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskrank", version, about = "Priority scoring for to-do tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank a batch of tasks
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show the top suggestions from a batch
    Suggest(commands::analyze::SuggestArgs),
    /// Score a single task without batch context
    Score(commands::score::ScoreArgs),
    /// List the strategy presets
    Strategies,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Suggest(args) => commands::analyze::run_suggest(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Strategies => commands::strategies::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
