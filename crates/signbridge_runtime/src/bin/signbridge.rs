//! Signbridge CLI entry point.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use signbridge_foundation::{Error, Result};
use signbridge_runtime::repl::render_delivery;
use signbridge_runtime::{ConfigOverrides, Repl, RuntimeConfig, Session, logging};

/// Translate English text to sign-language gloss and play it on an avatar.
#[derive(Parser, Debug)]
#[command(name = "signbridge", version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Animation consumer endpoint (ws://host:port, tcp://host:port, or host:port)
    #[arg(short, long, env = "SIGNBRIDGE_ENDPOINT")]
    endpoint: Option<String>,

    /// Lexicon JSON file replacing the built-in English lexicon
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Clip map JSON file (gloss -> clip name)
    #[arg(long, value_name = "FILE")]
    clip_map: Option<PathBuf>,

    /// Translate only; never contact the consumer
    #[arg(long)]
    no_send: bool,

    /// Translate one sentence and exit
    #[arg(short, long, conflicts_with = "batch")]
    text: Option<String>,

    /// Translate every line of FILE ("-" for stdin) and exit
    #[arg(short, long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Log filter directive, e.g. "signbridge_clips=debug"
    #[arg(long, env = "SIGNBRIDGE_LOG")]
    log: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = &e.context {
                eprintln!("  {context}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when any delivery failed.
fn run(cli: Cli) -> Result<bool> {
    let base = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    let config = base.with_overrides(ConfigOverrides {
        endpoint: cli.endpoint,
        lexicon: cli.lexicon,
        clip_map: cli.clip_map,
        no_send: cli.no_send,
        log: cli.log,
    });

    logging::init(logging::filter_directive(cli.verbose, config.log_filter()))?;

    let mut session = Session::from_config(&config)?;

    if let Some(text) = cli.text {
        let delivery = session.submit(&text);
        println!("{}", render_delivery(&delivery));
        return Ok(!delivery.is_failed());
    }

    if let Some(path) = cli.batch {
        let input = read_batch(&path)?;
        let mut ok = true;
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let delivery = session.submit(line);
            println!("{}\n", render_delivery(&delivery));
            ok &= !delivery.is_failed();
        }
        return Ok(ok);
    }

    Repl::new(session)?.run()?;
    Ok(true)
}

fn read_batch(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| Error::io(format!("failed to read stdin: {e}")))?;
        return Ok(input);
    }
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))
}
