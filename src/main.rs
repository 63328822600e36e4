//! View Registry CLI
//!
//! Usage:
//!   view-registry [OPTIONS] [TAG]
//!
//! Options:
//!   -m, --manifest <FILE>  Component manifest to register (TOML format)
//!   -s, --styles <FILE>    Style bundles merged over the defaults (TOML format)
//!   -p, --props <FILE>     Property values for the rendered component (TOML format)
//!   -l, --list             List registered tags
//!   --compact              Emit HTML without newlines or indentation
//!   --no-inline-styles     Keep `<style include>` instead of inlining bundles
//!   --no-host              Do not wrap the output in the component's tag
//!   -v, --verbose          Enable debug logging
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use view_registry::{
    load_properties, load_registry, load_styles, render_with_config, HtmlConfig, RenderConfig,
    ViewError,
};

#[derive(Parser)]
#[command(name = "view-registry")]
#[command(about = "Render registered view components to HTML")]
struct Cli {
    /// Tag of the component to render
    #[arg(default_value = "show-home")]
    tag: String,

    /// Component manifest to register (TOML format)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Style bundles merged over the defaults (TOML format)
    #[arg(short, long)]
    styles: Option<PathBuf>,

    /// Property values for the rendered component (TOML format)
    #[arg(short, long)]
    props: Option<PathBuf>,

    /// List registered tags and exit
    #[arg(short, long)]
    list: bool,

    /// Emit HTML without newlines or indentation
    #[arg(long)]
    compact: bool,

    /// Keep `<style include>` instead of inlining bundles
    #[arg(long)]
    no_inline_styles: bool,

    /// Do not wrap the output in the component's tag
    #[arg(long)]
    no_host: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ViewError> {
    let registry = load_registry(cli.manifest.as_deref())?;

    if cli.list {
        for tag in registry.tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let styles = load_styles(cli.styles.as_deref())?;
    let properties = load_properties(cli.props.as_deref())?;

    let config = RenderConfig::new().with_styles(styles).with_html(
        HtmlConfig::new()
            .with_pretty_print(!cli.compact)
            .with_inline_styles(!cli.no_inline_styles)
            .with_wrap_host(!cli.no_host),
    );
    let html = render_with_config(&registry, &cli.tag, &properties, &config)?;
    println!("{}", html);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
