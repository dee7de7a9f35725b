//! Pathstate CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use pathstate_cli::{Args, Report, error_adapter::to_reportable, render_toml};

fn render(reportable: &impl miette::Diagnostic) {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, reportable)
        .expect("Writing to String buffer is infallible");

    error!("{writer}");
}

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Pathstate");
    debug!(args:?; "Parsed arguments");

    let reports = match pathstate_cli::run(&args).and_then(|reports| {
        let rendered = render_toml(&reports)?;
        Ok((reports, rendered))
    }) {
        Ok((reports, rendered)) => {
            print!("{rendered}");
            reports
        }
        Err(err) => {
            render(&to_reportable(&err));
            process::exit(1);
        }
    };

    let mut failed = false;
    for reportable in reports.iter().filter_map(Report::reportable) {
        render(&reportable);
        failed = true;
    }

    if failed {
        process::exit(1);
    }

    info!("Completed successfully");
}
