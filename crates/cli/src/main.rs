// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::IsTerminal;

use clap::Parser;
use fflow::Cli;

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(fflow::env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(fflow::env::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = fflow::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
