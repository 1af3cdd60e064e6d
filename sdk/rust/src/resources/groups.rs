//! Group queries and mutations.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{boards_by_ids, field, mutation, query};
use crate::operation::Operation;
use crate::types::{GroupAttribute, Ids, PositionRelativeMethod};

/// Returns the groups of one or more boards, optionally filtered by group ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchGroups {
    pub board_ids: Ids,
    pub group_ids: Option<Ids>,
}

impl FetchGroups {
    pub fn new(board_ids: impl Into<Ids>) -> Self {
        Self {
            board_ids: board_ids.into(),
            group_ids: None,
        }
    }
}

impl Operation for FetchGroups {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("ids", self.group_ids.clone());
        let groups = field("groups", &arguments, &ParameterOptions::new())
            .select("archived color deleted id position title");

        query(
            boards_by_ids(&self.board_ids)?
                .child(groups)
                .select("id name"),
        )
    }
}

/// Creates an empty group.
///
/// `group_color` is a hex code such as `#ff642e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroup {
    pub board_id: String,
    pub group_name: String,
    pub relative_to: Option<String>,
    pub position_relative_method: Option<PositionRelativeMethod>,
    pub group_color: Option<String>,
}

impl CreateGroup {
    pub fn new(board_id: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            group_name: group_name.into(),
            relative_to: None,
            position_relative_method: None,
            group_color: None,
        }
    }
}

impl Operation for CreateGroup {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("group_name", self.group_name.as_str())
            .with("relative_to", self.relative_to.clone())
            .with("position_relative_method", self.position_relative_method)
            .with("group_color", self.group_color.clone());
        let options = ParameterOptions::new().literal("position_relative_method");

        mutation(field("create_group", &arguments, &options).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGroup {
    pub board_id: String,
    pub group_id: String,
    pub group_attribute: GroupAttribute,
    pub new_value: String,
}

impl UpdateGroup {
    pub fn new(
        board_id: impl Into<String>,
        group_id: impl Into<String>,
        group_attribute: GroupAttribute,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            group_id: group_id.into(),
            group_attribute,
            new_value: new_value.into(),
        }
    }
}

impl Operation for UpdateGroup {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("group_id", self.group_id.as_str())
            .with("group_attribute", self.group_attribute)
            .with("new_value", self.new_value.as_str());
        let options = ParameterOptions::new().literal("group_attribute");

        mutation(field("update_group", &arguments, &options).select("id"))
    }
}

/// Duplicates a group with all of its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub board_id: String,
    pub group_id: String,
    pub group_title: Option<String>,
    pub add_to_top: Option<bool>,
}

impl DuplicateGroup {
    pub fn new(board_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            group_id: group_id.into(),
            group_title: None,
            add_to_top: None,
        }
    }
}

impl Operation for DuplicateGroup {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("group_id", self.group_id.as_str())
            .with("group_title", self.group_title.clone())
            .with("add_to_top", self.add_to_top);

        mutation(field("duplicate_group", &arguments, &ParameterOptions::new()).select("id"))
    }
}

/// Moves an item to another group on the same board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveItemToGroup {
    pub group_id: String,
    pub item_id: String,
}

impl MoveItemToGroup {
    pub fn new(group_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            item_id: item_id.into(),
        }
    }
}

impl Operation for MoveItemToGroup {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("group_id", self.group_id.as_str())
            .with("item_id", self.item_id.as_str());

        mutation(field("move_item_to_group", &arguments, &ParameterOptions::new()).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveGroup {
    pub board_id: String,
    pub group_id: String,
}

impl ArchiveGroup {
    pub fn new(board_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            group_id: group_id.into(),
        }
    }
}

impl Operation for ArchiveGroup {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("group_id", self.group_id.as_str());

        mutation(field("archive_group", &arguments, &ParameterOptions::new()).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteGroup {
    pub board_id: String,
    pub group_id: String,
}

impl DeleteGroup {
    pub fn new(board_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            group_id: group_id.into(),
        }
    }
}

impl Operation for DeleteGroup {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("group_id", self.group_id.as_str());

        mutation(field("delete_group", &arguments, &ParameterOptions::new()).select("id deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_groups() {
        insta::assert_snapshot!(
            FetchGroups::new("1").render().unwrap(),
            @r#"query { boards(ids: ["1"]) { groups { archived color deleted id position title } id name } }"#
        );

        let op = FetchGroups {
            group_ids: Some("topics".into()),
            ..FetchGroups::new("1")
        };
        assert!(op
            .render()
            .unwrap()
            .contains(r#"groups(ids: ["topics"]) {"#));
    }

    #[test]
    fn test_fetch_groups_requires_board_ids() {
        let err = FetchGroups::new(Ids::default()).render().unwrap_err();
        assert!(matches!(err, ArgumentError::Invalid { ref parameter, .. } if parameter == "board_ids"));
    }

    #[test]
    fn test_create_group_color_is_quoted() {
        let op = CreateGroup {
            relative_to: Some("topics".to_string()),
            position_relative_method: Some(PositionRelativeMethod::AfterAt),
            group_color: Some("#ff642e".to_string()),
            ..CreateGroup::new("1", "Backlog")
        };
        insta::assert_snapshot!(
            op.render().unwrap(),
            @r##"mutation { create_group(board_id: "1", group_name: "Backlog", relative_to: "topics", position_relative_method: after_at, group_color: "#ff642e") { id } }"##
        );
    }

    #[test]
    fn test_update_group() {
        let op = UpdateGroup::new("1", "topics", GroupAttribute::Title, "Renamed");
        assert_eq!(
            op.render().unwrap(),
            r#"mutation { update_group(board_id: "1", group_id: "topics", group_attribute: title, new_value: "Renamed") { id } }"#
        );
    }

    #[test]
    fn test_group_mutations() {
        let op = DuplicateGroup {
            add_to_top: Some(true),
            ..DuplicateGroup::new("1", "topics")
        };
        assert_eq!(
            op.render().unwrap(),
            r#"mutation { duplicate_group(board_id: "1", group_id: "topics", add_to_top: true) { id } }"#
        );
        assert_eq!(
            MoveItemToGroup::new("done", "99").render().unwrap(),
            r#"mutation { move_item_to_group(group_id: "done", item_id: "99") { id } }"#
        );
        assert_eq!(
            ArchiveGroup::new("1", "topics").render().unwrap(),
            r#"mutation { archive_group(board_id: "1", group_id: "topics") { id } }"#
        );
        assert_eq!(
            DeleteGroup::new("1", "topics").render().unwrap(),
            r#"mutation { delete_group(board_id: "1", group_id: "topics") { id deleted } }"#
        );
    }
}
