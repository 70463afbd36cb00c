use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use menu_render::{
    Config, MenuParser, MenuRenderer, OptionOverrides, RenderContext, StaticRequest,
    MAX_RENDER_DEPTH,
};
use tracing_subscriber::EnvFilter;

/// Render a JSON menu definition to HTML for a given request URL
#[derive(Debug, Parser)]
#[command(name = "menu-render", version)]
struct Cli {
    /// Menu definition (JSON)
    input: PathBuf,

    /// URL of the current request, used to mark active items
    #[arg(long)]
    url: String,

    /// Only render the list with this name
    #[arg(long)]
    list: Option<String>,

    /// Class for the item matching the request
    #[arg(long)]
    active_class: Option<String>,

    /// Class for items with an active descendant
    #[arg(long)]
    active_child_class: Option<String>,

    /// Starting indentation depth
    #[arg(long, value_parser = parse_depth)]
    depth: Option<usize>,

    /// Config file with default options
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            active_class: self.active_class.clone(),
            active_child_class: self.active_child_class.clone(),
            render_depth: self.depth,
        }
    }
}

fn parse_depth(value: &str) -> std::result::Result<usize, String> {
    let depth: usize = value.parse().map_err(|e| format!("{}", e))?;
    if depth > MAX_RENDER_DEPTH {
        return Err(format!("must be at most {}", MAX_RENDER_DEPTH));
    }
    Ok(depth)
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("menu_render=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;
    // Config classes act as item defaults; flags apply at render time over everything
    let overrides = config.render_overrides().merge(&cli.overrides());

    let menu = MenuParser
        .parse_file_with_defaults(&cli.input, &config.item_defaults())
        .with_context(|| format!("Failed to load menu from {}", cli.input.display()))?;
    let request = StaticRequest::parse(&cli.url)?;

    let context = RenderContext::new(&request, &overrides);
    let output = MenuRenderer.render(&menu, cli.list.as_deref(), &context)?;

    println!("{}", output);

    Ok(())
}
