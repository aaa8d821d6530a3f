use crate::config::{Config, OutputFormat};
use crate::loader::load_tree;
use crate::output::{to_json, to_outline};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file describing the element tree
    pub input: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Spaces per indentation level (overrides config)
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Load a JSON element tree and print it
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn render(args: RenderArgs, config: &Config) -> Result<()> {
    let output = render_file(&args, config)?;
    print!("{}", output);
    Ok(())
}

fn render_file(args: &RenderArgs, config: &Config) -> Result<String> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", args.input.display()))?;
    let tree = load_tree(&json)?;
    info!(root = %tree.component().name(), "Rendering element tree");

    let indent = args.indent.unwrap_or(config.indent);
    Ok(match args.format.unwrap_or(config.format) {
        OutputFormat::Outline => to_outline(&tree, indent),
        OutputFormat::Json => format!("{}\n", to_json(&tree, indent)?),
    })
}
