// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ff_core::{ClockSource, RoadmapItem, Storage, Store};

use crate::cli::OutputFormat;
use crate::display::format_roadmap_line;
use crate::error::{Error, Result};
use crate::validate::validate_title;

use super::open_store;

pub fn list(output: OutputFormat) -> Result<()> {
    let (store, _, _) = open_store()?;
    let items = list_impl(&store);
    match output {
        OutputFormat::Text => {
            if items.is_empty() {
                println!("No roadmap items.");
            }
            for item in &items {
                println!("{}", format_roadmap_line(item));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        OutputFormat::Ids => {
            for item in &items {
                println!("{}", item.id);
            }
        }
    }
    Ok(())
}

/// Roadmap items, most votes first; ties keep insertion order.
pub(crate) fn list_impl<S: Storage, C: ClockSource>(store: &Store<S, C>) -> Vec<&RoadmapItem> {
    let mut items: Vec<&RoadmapItem> = store.roadmap().iter().collect();
    items.sort_by(|a, b| b.votes.cmp(&a.votes));
    items
}

pub fn add(title: &str, description: &str, target: Option<String>) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let item = add_impl(&mut store, title, description, target)?;
    println!("Added roadmap item {}: {}", item.id, item.title);
    Ok(())
}

pub(crate) fn add_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    title: &str,
    description: &str,
    target: Option<String>,
) -> Result<RoadmapItem> {
    let title = validate_title(title)?;
    Ok(store.add_roadmap_item(&title, description, target)?.clone())
}

pub fn vote(id: &str) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let (id, votes) = vote_impl(&mut store, id)?;
    println!("Voted for {} ({} votes)", id, votes);
    Ok(())
}

pub(crate) fn vote_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    id: &str,
) -> Result<(String, u32)> {
    let id = store
        .resolve_roadmap_id(id)
        .map_err(|_| Error::RoadmapItemNotFound(id.to_string()))?;
    if !store.vote_roadmap(&id) {
        return Err(Error::RoadmapItemNotFound(id));
    }
    let votes = store
        .roadmap()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.votes)
        .unwrap_or_default();
    Ok((id, votes))
}

#[cfg(test)]
#[path = "roadmap_tests.rs"]
mod tests;
