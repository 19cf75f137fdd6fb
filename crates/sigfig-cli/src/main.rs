//! The sigfig command-line interface for practicing scientific notation and significant figures.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sigfig_core::model::Category;
use sigfig_core::rules::RuleSection;

mod commands;

#[derive(Parser)]
#[command(
    name = "sigfig",
    version,
    about = "Scientific notation and significant figures practice"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer generated problems interactively
    Practice {
        /// Problem category (e.g. "toScientific", "countSigFigs", "mixed")
        #[arg(long)]
        category: Option<Category>,

        /// Stop after this many answered problems
        #[arg(long)]
        rounds: Option<u32>,

        /// Seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take the eight-question knowledge quiz
    Quiz {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the notation and significant-figure rules
    Rules {
        /// Only this section: scientific, sigfigs, operations
        #[arg(long)]
        section: Option<RuleSection>,
    },

    /// Print generated problems without asking for answers
    Generate {
        /// Problem category
        #[arg(long)]
        category: Category,

        /// Number of problems
        #[arg(long, default_value = "1")]
        count: usize,

        /// Seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,

        /// Emit problems as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an answer against a problem saved as JSON
    Check {
        /// Problem JSON file (as written by `generate --json`)
        #[arg(long)]
        problem: PathBuf,

        /// The answer to check
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
    },

    /// List problem categories
    Categories,

    /// Create a starter sigfig.toml
    Init,
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sigfig=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            category,
            rounds,
            seed,
            config,
        } => commands::practice::execute(category, rounds, seed, config),
        Commands::Quiz { config } => commands::quiz::execute(config),
        Commands::Rules { section } => commands::rules::execute(section),
        Commands::Generate {
            category,
            count,
            seed,
            json,
        } => commands::generate::execute(category, count, seed, json),
        Commands::Check { problem, answer } => commands::check::execute(problem, answer),
        Commands::Categories => commands::categories::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
