//! `strcalc` command-line front end

mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::ArgMatches;
use std::path::PathBuf;
use std::process::ExitCode;
use strcalc_core::{Calculator, CalculatorConfig, Variant};

fn main() -> ExitCode {
    let matches = cli::build().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map_or("warn", String::as_str);
    logging::init(level);

    match run(&matches) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<bool> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let calc = Calculator::with_config(config).context("invalid calculator config")?;

    match matches.subcommand() {
        Some(("add", args)) => {
            let variant = args
                .get_one::<Variant>("variant")
                .copied()
                .unwrap_or(Variant::V5);

            let raw = match args.get_one::<String>("input") {
                Some(text) => Some(text.clone()),
                None => cli::read_stdin().context("failed to read input from stdin")?,
            };
            let input = if args.get_flag("escapes") {
                raw.as_deref().map(cli::unescape)
            } else {
                raw
            };

            tracing::info!("Running {variant} on {input:?}");
            commands::run_add(&calc, variant, input.as_deref(), args.get_flag("json"))
        }
        Some(("demo", _)) => {
            for line in commands::demo_lines(&calc) {
                println!("{line}");
            }
            Ok(true)
        }
        _ => anyhow::bail!("no subcommand given"),
    }
}
