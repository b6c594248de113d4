//! `tablescrape` CLI - extract HTML tables from a page, file or stdin

mod cmd;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tablescrape::OutputFormat;

#[derive(Parser)]
#[command(name = "tablescrape")]
#[command(about = "Extract HTML tables into named-column records")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/tablescrape/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every table of a page
    Extract {
        /// URL, HTML file, or `-` for stdin
        source: String,

        /// Keep cell markup instead of cell text
        #[arg(long)]
        raw: bool,

        /// Replace cells containing a link with the link target
        #[arg(long, conflicts_with = "raw")]
        links: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Only output the table at this index (0-based)
        #[arg(short, long)]
        table: Option<usize>,

        /// Column coercion, e.g. `Grosses=currency` (repeatable)
        #[arg(short, long = "coerce", value_name = "COL=KIND")]
        coerce: Vec<String>,

        /// Base URL for resolving relative links (defaults to the source URL)
        #[arg(long)]
        base: Option<String>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tablescrape={default_level}")));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Extract {
            source,
            raw,
            links,
            format,
            table,
            coerce,
            base,
            output,
        } => {
            let options = cmd::extract::ExtractOptions {
                raw,
                links,
                format,
                table,
                coerce,
                base,
                output,
            };
            cmd::extract::cmd_extract(&source, cli.config.as_deref(), options).await?;
        }
        Commands::Config { path } => {
            cmd::config::cmd_config(cli.config.as_deref(), path)?;
        }
    }

    Ok(())
}
