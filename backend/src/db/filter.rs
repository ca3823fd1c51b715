//! Compiles a race listing filter into a WHERE clause with positional arguments.

use super::sqlite_helpers::placeholders;
use crate::rpc::ListRacesRequestFilter;

/// Append the filter's conditions to `query`.
///
/// Returns the query unchanged with no arguments when the filter is absent or
/// empty. Meeting ids are bound in the order given.
pub fn apply_filter(query: &str, filter: Option<&ListRacesRequestFilter>) -> (String, Vec<i64>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut args: Vec<i64> = Vec::new();

    let Some(filter) = filter else {
        return (query.to_string(), args);
    };

    if !filter.meeting_ids.is_empty() {
        clauses.push(format!(
            "meeting_id IN ({})",
            placeholders(filter.meeting_ids.len())
        ));
        args.extend_from_slice(&filter.meeting_ids);
    }

    if filter.visible_only {
        clauses.push("visible = 1".to_string());
    }

    if clauses.is_empty() {
        return (query.to_string(), args);
    }

    (format!("{query} WHERE {}", clauses.join(" AND ")), args)
}
