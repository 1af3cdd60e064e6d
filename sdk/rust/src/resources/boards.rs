//! Board queries and mutations.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{field, mutation, query};
use crate::operation::Operation;
use crate::types::{BoardAttribute, BoardKind, DuplicateBoardType, Ids, OrderBy, State};

const BOARD_FIELDS: &str = "id name board_folder_id board_kind communication description \
    items_count item_terminology permissions state type updated_at workspace_id \
    creator { id name email } owners { id name email } subscribers { id name email } \
    groups { id title color position } top_group { id title color } \
    tags { id name color } columns { id title type }";

/// Returns metadata about one or a collection of boards.
///
/// With no filters set the API returns the first page of active boards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchBoards {
    pub ids: Option<Ids>,
    pub board_kind: Option<BoardKind>,
    /// Page size; the API defaults to 25.
    pub limit: Option<u32>,
    pub order_by: Option<OrderBy>,
    /// Page number, starting at 1.
    pub page: Option<u32>,
    pub state: Option<State>,
    pub workspace_ids: Option<Ids>,
}

impl Operation for FetchBoards {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("ids", self.ids.clone())
            .with("board_kind", self.board_kind)
            .with("limit", self.limit)
            .with("order_by", self.order_by)
            .with("page", self.page)
            .with("state", self.state)
            .with("workspace_ids", self.workspace_ids.clone());
        let options = ParameterOptions::new().literals(["board_kind", "order_by", "state"]);

        query(field("boards", &arguments, &options).select(BOARD_FIELDS))
    }
}

/// Creates a board.
///
/// The caller becomes an owner of private and shareable boards, and of any
/// board created without `board_owner_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoard {
    pub board_name: String,
    pub board_kind: BoardKind,
    pub board_owner_ids: Option<Ids>,
    pub board_subscriber_ids: Option<Ids>,
    pub board_subscriber_team_ids: Option<Ids>,
    pub description: Option<String>,
    pub folder_id: Option<String>,
    pub template_id: Option<String>,
    pub workspace_id: Option<String>,
}

impl CreateBoard {
    pub fn new(board_name: impl Into<String>, board_kind: BoardKind) -> Self {
        Self {
            board_name: board_name.into(),
            board_kind,
            board_owner_ids: None,
            board_subscriber_ids: None,
            board_subscriber_team_ids: None,
            description: None,
            folder_id: None,
            template_id: None,
            workspace_id: None,
        }
    }
}

impl Operation for CreateBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_name", self.board_name.as_str())
            .with("board_kind", self.board_kind)
            .with("board_owner_ids", self.board_owner_ids.clone())
            .with("board_subscriber_ids", self.board_subscriber_ids.clone())
            .with(
                "board_subscriber_team_ids",
                self.board_subscriber_team_ids.clone(),
            )
            .with("description", self.description.clone())
            .with("folder_id", self.folder_id.clone())
            .with("template_id", self.template_id.clone())
            .with("workspace_id", self.workspace_id.clone());
        let options = ParameterOptions::new().literal("board_kind");

        mutation(field("create_board", &arguments, &options).select("id"))
    }
}

/// Duplicates a board, optionally into another workspace.
///
/// Moving to another workspace requires a destination folder, so setting
/// `workspace_id` without `folder_id` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateBoard {
    pub board_id: String,
    pub duplicate_type: DuplicateBoardType,
    /// Generated by the API when omitted.
    pub board_name: Option<String>,
    pub workspace_id: Option<String>,
    pub folder_id: Option<String>,
    pub keep_subscribers: Option<bool>,
}

impl DuplicateBoard {
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            duplicate_type: DuplicateBoardType::default(),
            board_name: None,
            workspace_id: None,
            folder_id: None,
            keep_subscribers: None,
        }
    }
}

impl Operation for DuplicateBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        if self.workspace_id.is_some() && self.folder_id.is_none() {
            return Err(ArgumentError::MissingCompanion {
                parameter: "workspace_id",
                requires: "folder_id",
            });
        }

        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("duplicate_type", self.duplicate_type)
            .with("board_name", self.board_name.clone())
            .with("workspace_id", self.workspace_id.clone())
            .with("folder_id", self.folder_id.clone())
            .with("keep_subscribers", self.keep_subscribers);
        let options = ParameterOptions::new().literal("duplicate_type");

        mutation(field("duplicate_board", &arguments, &options).select("board { id }"))
    }
}

/// Updates a single board attribute. The API answers with a JSON scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBoard {
    pub board_id: String,
    pub board_attribute: BoardAttribute,
    pub new_value: String,
}

impl UpdateBoard {
    pub fn new(
        board_id: impl Into<String>,
        board_attribute: BoardAttribute,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            board_attribute,
            new_value: new_value.into(),
        }
    }
}

impl Operation for UpdateBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("board_attribute", self.board_attribute)
            .with("new_value", self.new_value.as_str());
        let options = ParameterOptions::new().literal("board_attribute");

        mutation(field("update_board", &arguments, &options))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBoard {
    pub board_id: String,
}

impl ArchiveBoard {
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

impl Operation for ArchiveBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("board_id", self.board_id.as_str());
        mutation(field("archive_board", &arguments, &ParameterOptions::new()).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBoard {
    pub board_id: String,
}

impl DeleteBoard {
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

impl Operation for DeleteBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("board_id", self.board_id.as_str());
        mutation(field("delete_board", &arguments, &ParameterOptions::new()).select("id"))
    }
}
