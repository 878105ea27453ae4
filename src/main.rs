use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aqi_advisor::config::{Command, Config};
use aqi_advisor::data::batch::{open_batch, read_rows};
use aqi_advisor::pipeline::{assess_batch, write_assessment};
use aqi_advisor::utils::input::read_form;
use aqi_advisor::{assess, init_model};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqi_advisor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    tracing::info!(model = %config.model.display(), format = ?config.format, "starting");

    let model = init_model(&config.model)
        .with_context(|| format!("cannot start without a model ({})", config.model.display()))?;

    match config.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            let (reading, profile) = read_form(&mut input, &mut out)?;
            let assessment = assess(model, &reading, &profile)?;
            write_assessment(&mut out, &assessment, config.format)?;
        }
        Command::Predict(args) => {
            let (reading, profile) = args.split();
            let assessment = assess(model, &reading, &profile)?;
            write_assessment(&mut io::stdout().lock(), &assessment, config.format)?;
        }
        Command::Batch { path, keep_going } => {
            let rows = read_rows(&open_batch(&path)?);
            tracing::info!(rows = rows.len(), path = %path.display(), "batch loaded");
            let mut out = io::stdout().lock();
            let written = assess_batch(model, rows, keep_going, config.format, &mut out)?;
            tracing::info!(written, "batch finished");
        }
    }

    Ok(())
}
