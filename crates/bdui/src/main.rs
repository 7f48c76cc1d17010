#![warn(missing_docs)]

//! Entry point for the `bdui` binary.

mod cli;
mod console;
mod error;
mod session;

use std::process;

use clap::Parser;
use config::{Config, DecodePolicy};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
    session::{Session, Tapped},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        error!("{err}");
        eprintln!("error: {}", err.report());
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, load config, and run the chosen subcommand.
async fn run() -> Result<()> {
    let Cli {
        log,
        config: config_path,
        strict,
        command,
    } = Cli::parse();
    let env_filter = logging::env_filter_from_spec(&log.spec());
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    let mut cfg = match config::resolve_config_path(config_path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            config::load_from_path(&path)?
        }
        None => Config::default(),
    };
    if strict {
        cfg.decode_policy = DecodePolicy::Strict;
    }

    match command {
        Commands::Validate(doc) => {
            let node = Session::new(&cfg, &doc)?.validate().await?;
            println!(
                "valid: {} nodes, {} actions",
                node.node_count(),
                node.action_count()
            );
        }
        Commands::Render(doc) => {
            let outline = Session::new(&cfg, &doc)?.render().await?;
            print!("{outline}");
        }
        Commands::Tap(args) => {
            let mut session = Session::new(&cfg, &args.doc)?;
            print!("{}", session.render().await?);
            let tapped = session.tap(&args.title)?;
            if tapped == Tapped::Inert {
                println!("-> '{}' has no action", args.title);
            }
            if let Some(outline) = session.settle(tapped).await {
                print!("{outline}");
            }
        }
    }
    Ok(())
}
