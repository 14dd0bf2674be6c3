//! Command-line entry point: fetch one user and print the rendered profile.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};

use clap::Parser;
use tokio::runtime::Builder;

use user_profile::cli::{self, CliArgs};
use user_profile::telemetry;

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    telemetry::init();

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> io::Result<()> {
    let settings = cli::load_settings().map_err(io::Error::other)?;
    let markup = cli::run(&args, &settings)
        .await
        .map_err(io::Error::other)?;

    writeln!(io::stdout().lock(), "{markup}")
}
