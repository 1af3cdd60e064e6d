//! The resource catalog.
//!
//! Each operation is a plain struct whose fields are the call arguments.
//! Rendering gathers them into an [`Arguments`] set, serializes it with the
//! operation's literal and exclusion rules, and wraps the fragments in the
//! query or mutation text.

pub mod boards;
pub mod columns;
pub mod folders;
pub mod groups;
pub mod items;
pub mod notifications;
pub mod tags;
pub mod teams;
pub mod updates;
pub mod users;
pub mod versions;
pub mod webhooks;
pub mod workspaces;

use monday_core::{
    format_argument, format_parameters, ArgumentError, Arguments, Document, Field,
    ParameterOptions,
};
use serde_json::Value;

use crate::types::Ids;

/// Renders `query { field }`.
pub(crate) fn query(field: Field) -> Result<String, ArgumentError> {
    Ok(Document::query(field).render())
}

/// Renders `mutation { field }`.
pub(crate) fn mutation(field: Field) -> Result<String, ArgumentError> {
    Ok(Document::mutation(field).render())
}

/// Builds a field whose arguments are the serialized `arguments`.
pub(crate) fn field(name: &str, arguments: &Arguments, options: &ParameterOptions) -> Field {
    Field::new(name).arguments(format_parameters(arguments, options))
}

/// Builds the `boards(ids: [...])` wrapper used by nested queries.
///
/// An empty list would widen the query to every board, so it is rejected.
pub(crate) fn boards_by_ids(ids: &Ids) -> Result<Field, ArgumentError> {
    if ids.is_empty() {
        return Err(ArgumentError::invalid(
            "board_ids",
            "at least one board id is required",
        ));
    }
    let ids = Value::from(ids.clone());
    Ok(Field::new("boards").argument(format_argument("ids", &ids, false)))
}
