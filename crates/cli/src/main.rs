//! Leibniz CLI
//!
//! Reports the series approximation of pi. The computation lives in
//! `leibniz-core`; this binary only chooses a configuration and prints.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use leibniz_core::{Precision, SeriesConfig, remainder_bound, terms};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

#[derive(ClapParser)]
#[command(name = "leibniz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with a truncated Leibniz series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the approximation
    Run {
        /// Number of series terms (overrides the config file)
        #[arg(short, long)]
        terms: Option<u32>,

        /// Path to a series configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Accumulate in 32-bit floats
        #[arg(long)]
        single: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print each signed series term, one per line
    Terms {
        /// Number of series terms
        #[arg(short, long, default_value_t = leibniz_core::DEFAULT_TERMS)]
        terms: u32,
    },

    /// Print the truncation error bound for a term count
    Bound {
        /// Number of series terms
        #[arg(short, long, default_value_t = leibniz_core::DEFAULT_TERMS)]
        terms: u32,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Logs go to stderr; stdout carries only results.
    let filter = match "leibniz=info".parse::<tracing_subscriber::filter::Directive>() {
        Ok(directive) => tracing_subscriber::EnvFilter::from_default_env().add_directive(directive),
        Err(_) => tracing_subscriber::EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            terms,
            config,
            single,
            json,
        } => {
            run_approximation(terms, config.as_deref(), single, json);
        }
        Commands::Terms { terms } => {
            run_terms(terms);
        }
        Commands::Bound { terms } => {
            println!("{}", remainder_bound(terms));
        }
        Commands::Completions { shell } => {
            run_completions(shell);
        }
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "leibniz", &mut io::stdout());
}

fn load_config(path: Option<&Path>) -> Result<SeriesConfig, String> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            SeriesConfig::from_toml(&content)
        }
        None => Ok(SeriesConfig::default()),
    }
}

fn run_approximation(terms: Option<u32>, config_path: Option<&Path>, single: bool, json: bool) {
    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Some(terms) = terms {
        config = config.with_terms(terms);
    }
    if single {
        config = config.with_precision(Precision::Single);
    }

    info!(terms = config.terms, precision = ?config.precision, "running approximation");
    let report = leibniz_core::run(&config);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", report.value);
    }
}

fn run_terms(limit: u32) {
    for (i, term) in terms(limit).enumerate() {
        println!("{}\t{}", i, term);
    }
}
