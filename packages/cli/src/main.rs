mod commands;
mod config;
mod loader;
mod output;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{files, render, tree, FilesArgs, RenderArgs, TreeArgs};
use config::Config;

/// Arbor CLI - build and walk element trees
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a directory tree built from function components as JSON
    Files(FilesArgs),

    /// Classify and traverse a tree of class, function, and factory components
    Tree(TreeArgs),

    /// Load an element tree from a JSON file and print it
    Render(RenderArgs),
}

fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    let config = Config::load(&cwd)?;
    init_tracing(&config);

    match cli.command {
        Command::Files(args) => files(args, &config),
        Command::Tree(args) => tree(args, &config).await,
        Command::Render(args) => render(args, &config),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
