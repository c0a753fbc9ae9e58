//! Operator CLI for the Decorum decoration engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "decorumctl", version, about = "Order and page record collections")]
struct Cli {
    /// TOML file with engine configuration and capability overrides
    #[arg(long, global = true, env = "DECORUM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decorate a JSON collection read from a file or stdin
    Decorate {
        /// Collection document (`{"kind": ..., "records": [...]}`), `-` for stdin
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
        /// Primary sort field
        #[arg(long)]
        order_by: Option<String>,
        /// Sort the primary field in descending order
        #[arg(long, requires = "order_by")]
        desc: bool,
        /// Additional sort keys as `field` or `field:desc`
        #[arg(long = "then-by", requires = "order_by")]
        then_by: Vec<String>,
        /// Records to skip after ordering
        #[arg(long, requires = "limit")]
        offset: Option<usize>,
        /// Maximum records to return
        #[arg(long)]
        limit: Option<usize>,
        /// Pretty-print the output document
        #[arg(long)]
        pretty: bool,
    },
    /// List orderable fields per record kind
    Fields {
        /// Only show this kind (wire name, e.g. `log_entry`)
        #[arg(long)]
        kind: Option<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so decorated output on stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = commands::build_engine(cli.config.as_deref())?;

    match cli.command {
        Command::Decorate {
            input,
            order_by,
            desc,
            then_by,
            offset,
            limit,
            pretty,
        } => {
            let request = commands::build_request(order_by, desc, &then_by, offset, limit)?;
            commands::decorate(engine, &input, request, pretty)
        }
        Command::Fields { kind } => commands::list_fields(&engine, kind.as_deref()),
    }
}
