//! Command-line front end: load a translation directory, print keys, and
//! optionally keep polling the files for changes.
//!
//! ```text
//! json-localizer <dir> [--recursive] [--locale <code>] [--debug] [--watch <secs>] [key ...]
//! ```
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use json_localizer::config::{
    self,
    ConfigError,
};
use json_localizer::{
    Localizer,
    LocalizerError,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str =
    "usage: json-localizer <dir> [--recursive] [--locale <code>] [--debug] [--watch <secs>] [key ...]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LocalizerError),
}

#[derive(Debug, Default)]
struct Args {
    dir: PathBuf,
    recursive: bool,
    locale: Option<String>,
    debug: bool,
    /// Poll interval in seconds.
    watch: Option<u64>,
    keys: Vec<String>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut dir = None;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--recursive" | "-r" => args.recursive = true,
            "--debug" => args.debug = true,
            "--locale" | "-l" => {
                let locale = raw
                    .next()
                    .ok_or_else(|| CliError::Usage("--locale needs a value".to_string()))?;
                args.locale = Some(locale);
            }
            "--watch" | "-w" => {
                let secs = raw
                    .next()
                    .and_then(|value| value.parse().ok())
                    .ok_or_else(|| CliError::Usage("--watch needs a number of seconds".to_string()))?;
                args.watch = Some(secs);
            }
            _ if dir.is_none() => dir = Some(PathBuf::from(arg)),
            _ => args.keys.push(arg),
        }
    }

    args.dir = dir.ok_or_else(|| CliError::Usage("missing translation directory".to_string()))?;
    Ok(args)
}

fn print_keys(localizer: &Localizer, keys: &[String]) {
    for key in keys {
        println!("{key} = {}", localizer.translate(key));
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = config::load_from_dir(&args.dir)?.unwrap_or_default();
    let localizer = Localizer::new(config)?;
    localizer.set_debug_mode(args.debug);

    localizer.load_from_directory(&args.dir, args.recursive)?;

    if let Some(locale) = &args.locale
        && !localizer.set_locale(locale)
    {
        tracing::warn!(%locale, fallback = %localizer.locale(), "Locale not found");
    }

    let stats = localizer.stats();
    println!("Loaded {} languages:", stats.len());
    for stat in &stats {
        println!("  {} -> {} keys", stat.locale, stat.keys);
    }
    print_keys(&localizer, &args.keys);

    let Some(secs) = args.watch else {
        return Ok(());
    };

    tracing::info!(secs, "Watching for translation changes, press Ctrl-C to stop");
    let mut interval = tokio::time::interval(Duration::from_secs(secs.max(1)));
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if localizer.check_for_changes() > 0 {
                    print_keys(&localizer, &args.keys);
                }
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(error) = result {
                    tracing::warn!(%error, "Failed to listen for Ctrl-C");
                }
                break;
            }
        }
    }

    Ok(())
}

/// Log filter from `RUST_LOG`-style `directives`, `info` when none are given.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[tokio::main]
async fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt().with_env_filter(log_filter(directives.as_deref())).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "json-localizer failed");
            ExitCode::FAILURE
        }
    }
}
