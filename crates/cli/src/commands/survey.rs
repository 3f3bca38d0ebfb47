// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_survey;
use crate::error::Result;

use super::open_store;

pub fn list(output: OutputFormat) -> Result<()> {
    let (store, _, _) = open_store()?;
    let surveys = store.surveys();
    match output {
        OutputFormat::Text => {
            if surveys.is_empty() {
                println!("No surveys. Run 'ff demo' to load sample surveys.");
            }
            let blocks: Vec<String> = surveys.iter().map(format_survey).collect();
            if !blocks.is_empty() {
                println!("{}", blocks.join("\n\n"));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(surveys)?),
        OutputFormat::Ids => {
            for survey in surveys {
                println!("{}", survey.id);
            }
        }
    }
    Ok(())
}
