// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_stats;
use crate::error::Result;

use super::open_store;

pub fn run(output: OutputFormat) -> Result<()> {
    let (store, _, _) = open_store()?;
    let analytics = store.analytics();
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analytics)?),
        OutputFormat::Text | OutputFormat::Ids => println!("{}", format_stats(&analytics)),
    }
    Ok(())
}
