//! sbom-viz: SBOM dependency graph visualizer

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_viz::{run_render, ImageFormat, RenderConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-viz")]
#[command(version)]
#[command(about = "Render an SBOM as a deduplicated dependency graph", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render a Syft SBOM to PNG next to the input
    sbom-viz render host.syft.json

    # SVG to an explicit path, opened in the default viewer
    sbom-viz render host.syft.json -O graph.svg --format svg --open

    # Keep every relationship, including redundant ones
    sbom-viz render host.syft.json --no-reduce

    # Inspect the DOT source instead of rendering
    sbom-viz render host.syft.json --format dot")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `render` subcommand
#[derive(Args)]
struct RenderArgs {
    /// Path to the SBOM JSON file
    sbom: PathBuf,

    /// Output file path (default: <input-stem>_deps.<ext> next to the input)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "png")]
    format: ImageFormat,

    /// Skip transitive reduction and keep redundant edges
    #[arg(long)]
    no_reduce: bool,

    /// Open the rendered file in the platform viewer
    #[arg(long)]
    open: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an SBOM dependency graph
    Render(RenderArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Render(args) => {
            let config = RenderConfig {
                input: args.sbom,
                output_file: args.output_file,
                format: args.format,
                reduce: !args.no_reduce,
                open: args.open,
            };
            let output = run_render(&config)?;
            println!("{}", output.display());
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-viz", &mut io::stdout());
            Ok(())
        }
    }
}
