//! Tag queries and mutations.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{field, mutation, query};
use crate::operation::Operation;
use crate::types::Ids;

/// Returns the account's public tags, optionally filtered by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTags {
    pub ids: Option<Ids>,
}

impl Operation for FetchTags {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("ids", self.ids.clone());
        query(field("tags", &arguments, &ParameterOptions::new()).select("color id name"))
    }
}

/// Creates a tag, or returns it if it already exists.
///
/// Private and shareable boards keep their own tags; pass `board_id` to
/// target one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrGetTag {
    pub tag_name: String,
    pub board_id: Option<String>,
}

impl CreateOrGetTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            board_id: None,
        }
    }
}

impl Operation for CreateOrGetTag {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("tag_name", self.tag_name.as_str())
            .with("board_id", self.board_id.clone());

        mutation(field("create_or_get_tag", &arguments, &ParameterOptions::new()).select("name color id"))
    }
}
