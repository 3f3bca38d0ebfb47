// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ff_core::Classification;

use crate::cli::OutputFormat;
use crate::display::format_classification;
use crate::error::Result;

/// Preview classification without touching the store.
pub fn run(text: &[String], output: OutputFormat) -> Result<()> {
    let classification = run_impl(text);
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&classification)?),
        OutputFormat::Text | OutputFormat::Ids => {
            println!("{}", format_classification(&classification))
        }
    }
    Ok(())
}

pub(crate) fn run_impl(text: &[String]) -> Classification {
    Classification::of(&text.join(" "))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
