//! Error handling utilities for systems
//!
//! Single-entity queries (primary window, board camera) can legitimately be
//! empty, e.g. in headless runs. These helpers turn the error into a log line
//! so the system can skip the frame instead of panicking.

use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

/// Log a failed single query and return `None`
pub fn handle_query_error<T>(result: Result<T, QuerySingleError>, system_name: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("[ERROR_HANDLER] {} failed: {:?}", system_name, e);
            None
        }
    }
}

/// Same as [`handle_query_error`] but only traces, for queries that are
/// expected to miss every frame in some configurations
pub fn quiet_query<T>(result: Result<T, QuerySingleError>, system_name: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            trace!("[ERROR_HANDLER] {} skipped: {:?}", system_name, e);
            None
        }
    }
}
