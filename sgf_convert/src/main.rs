use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sgf_convert::{decode_json, encode_json, Config};
use sgf_props::NodePosition;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// The properties belong to a node below the root, so game info is not converted
    #[arg(short, long, default_value_t = false, global = true)]
    child: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a JSON list of raw properties into a node, printed as JSON
    Decode {
        /// Path to a JSON file like `[{"prop": "SZ", "values": ["19"]}]`
        input: PathBuf,
    },
    /// Encode a node given as JSON into SGF property text
    Encode {
        /// Path to a JSON file containing the node
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        position: if args.child {
            NodePosition::Child
        } else {
            NodePosition::Root
        },
    };

    let (Command::Decode { input } | Command::Encode { input }) = &args.command;
    debug!(path = %input.display(), "Reading input");
    let contents = std::fs::read_to_string(input)
        .with_context(|| format!("Could not read '{}'", input.display()))?;

    let result = match args.command {
        Command::Decode { .. } => decode_json(&config, &contents)
            .and_then(|node| Ok(serde_json::to_string_pretty(&node)?)),
        Command::Encode { .. } => encode_json(&config, &contents),
    };
    // The error's cause chain is printed by anyhow
    println!("{}", result?);
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}
