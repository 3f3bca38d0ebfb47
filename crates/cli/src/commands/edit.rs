// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-record edits: status, team, response, votes and deletion.

use ff_core::{ClockSource, Status, Storage, Store, Team};

use crate::error::{Error, Result};
use crate::validate::validate_response;

use super::open_store;

fn not_found(id: &str) -> Error {
    Error::FeedbackNotFound(id.to_string())
}

pub fn status(id: &str, status: &str) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let (id, status) = status_impl(&mut store, id, status)?;
    println!("Updated {} status to {}", id, status);
    Ok(())
}

pub(crate) fn status_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    id: &str,
    status: &str,
) -> Result<(String, Status)> {
    let status: Status = status.trim().parse()?;
    let id = store.resolve_id(id)?;
    if !store.update_status(&id, status) {
        return Err(not_found(&id));
    }
    Ok((id, status))
}

pub fn assign(id: &str, team: &str) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let (id, team) = assign_impl(&mut store, id, team)?;
    println!("Assigned {} to {}", id, team);
    Ok(())
}

pub(crate) fn assign_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    id: &str,
    team: &str,
) -> Result<(String, Team)> {
    let team: Team = team.trim().parse()?;
    let id = store.resolve_id(id)?;
    if !store.assign_team(&id, team) {
        return Err(not_found(&id));
    }
    Ok((id, team))
}

pub fn respond(id: &str, text: &str) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let (id, cleared) = respond_impl(&mut store, id, text)?;
    if cleared {
        println!("Cleared response on {}", id);
    } else {
        println!("Responded to {}", id);
    }
    Ok(())
}

/// Returns the resolved id and whether the response was cleared.
pub(crate) fn respond_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    id: &str,
    text: &str,
) -> Result<(String, bool)> {
    let text = validate_response(text)?;
    let id = store.resolve_id(id)?;
    if !store.respond(&id, &text) {
        return Err(not_found(&id));
    }
    Ok((id, text.is_empty()))
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
    let id = store.resolve_id(id)?;
    if !store.vote(&id) {
        return Err(not_found(&id));
    }
    let votes = store.get(&id).map(|r| r.votes).unwrap_or_default();
    Ok((id, votes))
}

pub fn delete(id: &str) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let id = delete_impl(&mut store, id)?;
    println!("Deleted {}", id);
    Ok(())
}

pub(crate) fn delete_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    id: &str,
) -> Result<String> {
    let id = store.resolve_id(id)?;
    if !store.delete(&id) {
        return Err(not_found(&id));
    }
    Ok(id)
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
