//! confswap binary.

mod cli;
mod preferences;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command, ComposeArgs, ConvertArgs};
use preferences::Preferences;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; diagnostics go to stderr so stdout stays clean
    // for the converted output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let prefs_path = Preferences::default_path();
    let mut prefs = prefs_path
        .as_deref()
        .map(Preferences::load)
        .unwrap_or_default();

    let output = match &cli.command {
        Command::Config(args) => {
            let (from, to) = resolve_formats(args, &prefs)?;
            let text = read_input(args.file.as_deref())?;
            let output = confswap_core::convert_config_tagged(&text, &from, &to)?;
            remember_formats(&mut prefs, &args.from, &args.to, prefs_path.as_deref());
            output
        },
        Command::Env(args) => {
            let (from, to) = resolve_formats(args, &prefs)?;
            let text = read_input(args.file.as_deref())?;
            let output = confswap_core::convert_tagged(&text, &from, &to)?;
            remember_formats(&mut prefs, &args.from, &args.to, prefs_path.as_deref());
            output
        },
        Command::Compose(args) => {
            let to = resolve_compose_target(args, &prefs)?;
            let text = read_input(args.file.as_deref())?;
            let output = confswap_core::compose_to_spring_tagged(&text, &to)?;
            remember_formats(&mut prefs, &None, &args.to, prefs_path.as_deref());
            output
        },
    };

    println!("{output}");

    Ok(())
}

fn resolve_formats(args: &ConvertArgs, prefs: &Preferences) -> anyhow::Result<(String, String)> {
    let from = args
        .from
        .clone()
        .or_else(|| prefs.left_format.clone())
        .context("no source format given and none saved; pass --from")?;
    let to = args
        .to
        .clone()
        .or_else(|| prefs.right_format.clone())
        .context("no target format given and none saved; pass --to")?;

    Ok((from, to))
}

fn resolve_compose_target(args: &ComposeArgs, prefs: &Preferences) -> anyhow::Result<String> {
    args.to
        .clone()
        .or_else(|| prefs.right_format.clone())
        .context("no output flavor given and none saved; pass --to")
}

// Only explicitly passed tags are persisted; conversions driven entirely
// by saved preferences leave the file untouched.
fn remember_formats(
    prefs: &mut Preferences,
    from: &Option<String>,
    to: &Option<String>,
    path: Option<&Path>,
) {
    if from.is_none() && to.is_none() {
        return;
    }

    if let Some(from) = from {
        prefs.left_format = Some(from.clone());
    }
    if let Some(to) = to {
        prefs.right_format = Some(to.clone());
    }

    if let Some(path) = path {
        if let Err(e) = prefs.save(path) {
            tracing::debug!("could not persist format preferences: {}", e);
        }
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        },
    }
}
