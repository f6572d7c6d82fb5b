use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use akapen_config::Config;
use anyhow::Context;
use clap::Parser;

pub mod controller;
pub mod input;
pub mod logging;
pub mod output;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::validate_documents;
use self::state::AppState;

/// Check pre-tagged Japanese text for doubled particles
#[derive(Parser, Debug)]
#[command(name = "akapen", version)]
struct Args {
    /// JSON profile; defaults plus environment overrides when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document language, overrides the profile
    #[arg(short, long)]
    lang: Option<String>,

    /// Print findings as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Tagged token files (surface<TAB>tag,tag per line, blank line between sentences)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("akapen: {e}");
                return ExitCode::from(2);
            }
        },
        None => Config::new(),
    };
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    config.log_json |= args.log_json;

    logging::init(config.log_json);

    match run(config, &args).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(count) => {
            tracing::info!("{count} finding(s)");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(config: Config, args: &Args) -> anyhow::Result<usize> {
    let state = Arc::new(
        AppState::build(config)
            .await
            .context("failed to initialize validators")?,
    );

    tracing::debug!(
        "{} skip list(s) cached for language {}",
        state.dictionaries.word.cached_count(),
        state.config.language
    );

    let reports = validate_documents(state, &args.inputs).await?;
    let count = reports.len();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        output::write_json(&mut out, &reports)?;
    } else {
        output::write_text(&mut out, &reports)?;
    }

    Ok(count)
}
