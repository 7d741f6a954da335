use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{App, Status};

mod cli;
mod input;

fn main() -> ExitCode {
    let app = App::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&app) {
        Ok(Status::Success) => ExitCode::SUCCESS,
        Ok(Status::Mismatch) => ExitCode::FAILURE,
        Err(err) => {
            if !app.quiet {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
