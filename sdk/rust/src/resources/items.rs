//! Item pagination.
//!
//! Items are read page by page. The first page comes from [`FetchItemsPage`],
//! optionally filtered with `query_params`; each response carries a cursor
//! that [`FetchNextItemsPage`] exchanges for the next page.

use monday_core::{ArgumentError, Arguments, Field, ParameterOptions};

use super::{boards_by_ids, field, query};
use crate::operation::Operation;
use crate::types::Ids;

const ITEM_FIELDS: &str = "id name created_at relative_link state updated_at \
    board { id name } subitems { id name } subscribers { id name email } \
    group { id title } updates { id } column_values { id value text }";

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

fn items_page(name: &str, arguments: &Arguments, options: &ParameterOptions) -> Field {
    field(name, arguments, options)
        .select("cursor")
        .child(Field::new("items").select(ITEM_FIELDS))
}

/// Returns the first page of items on one or more boards.
///
/// `query_params` is written into the query as-is and must be a GraphQL
/// `ItemsQuery` input object, for example
/// `{rules: [{column_id: "status", compare_value: [1]}], operator: and}`.
/// It cannot be combined with `cursor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchItemsPage {
    pub board_ids: Ids,
    pub cursor: Option<String>,
    /// Page size, at most 500.
    pub limit: u32,
    pub query_params: Option<String>,
}

impl FetchItemsPage {
    pub fn new(board_ids: impl Into<Ids>) -> Self {
        Self {
            board_ids: board_ids.into(),
            cursor: None,
            limit: DEFAULT_PAGE_SIZE,
            query_params: None,
        }
    }
}

impl Operation for FetchItemsPage {
    fn render(&self) -> Result<String, ArgumentError> {
        if self.cursor.is_some() && self.query_params.is_some() {
            return Err(ArgumentError::Conflict {
                first: "cursor",
                second: "query_params",
            });
        }

        let arguments = Arguments::new()
            .with("cursor", self.cursor.clone())
            .with("limit", self.limit)
            .with("query_params", self.query_params.clone());
        let options = ParameterOptions::new().literal("query_params");

        query(
            boards_by_ids(&self.board_ids)?
                .child(items_page("items_page", &arguments, &options))
                .select("id name"),
        )
    }
}

/// Returns the page after `cursor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchNextItemsPage {
    pub cursor: String,
    pub limit: u32,
}

impl FetchNextItemsPage {
    pub fn new(cursor: impl Into<String>) -> Self {
        Self {
            cursor: cursor.into(),
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Operation for FetchNextItemsPage {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("cursor", self.cursor.as_str())
            .with("limit", self.limit);

        query(items_page("next_items_page", &arguments, &ParameterOptions::new()))
    }
}
