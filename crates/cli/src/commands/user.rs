// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ff_core::{ClockSource, CurrentUser, Storage, Store, UserType};

use crate::error::Result;

use super::open_store;

pub fn show() -> Result<()> {
    let (store, _, _) = open_store()?;
    let user = store.current_user();
    println!("{} ({})", user.name, user.user_type);
    Ok(())
}

pub fn set(user_type: &str, name: Option<String>) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let user = set_impl(&mut store, user_type, name)?;
    println!("Current user: {} ({})", user.name, user.user_type);
    Ok(())
}

/// Change the user type; the name is kept unless a non-blank one is given.
pub(crate) fn set_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    user_type: &str,
    name: Option<String>,
) -> Result<CurrentUser> {
    let user_type: UserType = user_type.trim().parse()?;
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| store.current_user().name.clone());
    let user = CurrentUser { user_type, name };
    store.set_current_user(user.clone());
    Ok(user)
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
