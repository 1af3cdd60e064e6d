//! Column queries and mutations.
//!
//! Columns can only be queried through their board, so [`FetchColumns`]
//! nests its field under `boards(ids: ...)`.

use monday_core::{json_string, ArgumentError, Arguments, ParameterOptions};
use serde_json::Value;

use super::{boards_by_ids, field, mutation, query};
use crate::operation::Operation;
use crate::types::{ColumnType, Ids};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchColumns {
    pub board_ids: Ids,
    pub column_ids: Option<Ids>,
    pub types: Option<ColumnType>,
}

impl FetchColumns {
    pub fn new(board_ids: impl Into<Ids>) -> Self {
        Self {
            board_ids: board_ids.into(),
            column_ids: None,
            types: None,
        }
    }
}

impl Operation for FetchColumns {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_ids", self.board_ids.clone())
            .with("column_ids", self.column_ids.clone())
            .with("types", self.types);
        let options = ParameterOptions::new()
            .literal("types")
            .exclude("board_ids");

        let columns = field("columns", &arguments, &options)
            .select("id title archived description settings_str type width");
        query(boards_by_ids(&self.board_ids)?.child(columns))
    }
}

/// Creates a column.
///
/// `defaults` is sent as a JSON string, e.g.
/// `{"labels": {"1": "Information technology"}}` for a status column.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateColumn {
    pub board_id: String,
    pub title: String,
    pub column_type: ColumnType,
    pub after_column_id: Option<String>,
    pub defaults: Option<Value>,
    pub description: Option<String>,
    /// Caller-chosen column ID: 1-20 lowercase letters or underscores, unique on the board.
    pub id: Option<String>,
}

impl CreateColumn {
    pub fn new(board_id: impl Into<String>, title: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
            column_type,
            after_column_id: None,
            defaults: None,
            description: None,
            id: None,
        }
    }
}

impl Operation for CreateColumn {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("title", self.title.as_str())
            .with("column_type", self.column_type)
            .with("after_column_id", self.after_column_id.clone())
            .with("defaults", self.defaults.as_ref().map(json_string))
            .with("description", self.description.clone())
            .with("id", self.id.clone());
        let options = ParameterOptions::new().literal("column_type");

        mutation(field("create_column", &arguments, &options).select("id title"))
    }
}

/// Changes one column value of an item.
///
/// `value` may be a JSON object or a string already holding JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeColumnValue {
    pub board_id: String,
    pub column_id: String,
    pub value: Value,
    pub item_id: Option<String>,
    /// Creates missing status or dropdown labels; needs board-structure permission.
    pub create_labels_if_missing: bool,
}

impl ChangeColumnValue {
    pub fn new(board_id: impl Into<String>, column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            value: value.into(),
            item_id: None,
            create_labels_if_missing: false,
        }
    }
}

impl Operation for ChangeColumnValue {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("column_id", self.column_id.as_str())
            .with("value", json_string(&self.value))
            .with("item_id", self.item_id.clone())
            .with("create_labels_if_missing", self.create_labels_if_missing);

        mutation(
            field("change_column_value", &arguments, &ParameterOptions::new())
                .select("id name column_values { id text value }"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_columns_nests_under_boards() {
        let op = FetchColumns {
            types: Some(ColumnType::Status),
            ..FetchColumns::new("123")
        };
        insta::assert_snapshot!(
            op.render().unwrap(),
            @r#"query { boards(ids: ["123"]) { columns(types: status) { id title archived description settings_str type width } } }"#
        );
    }

    #[test]
    fn test_fetch_columns_without_filters() {
        let rendered = FetchColumns::new(["1", "2"]).render().unwrap();
        assert!(rendered.starts_with(r#"query { boards(ids: ["1","2"]) { columns { id"#));
        assert!(!rendered.contains("board_ids"));
    }

    #[test]
    fn test_fetch_columns_requires_board_ids() {
        let err = FetchColumns::new(Ids::default()).render().unwrap_err();
        assert!(matches!(err, ArgumentError::Invalid { ref parameter, .. } if parameter == "board_ids"));
    }

    #[test]
    fn test_create_column_defaults_are_json_text() {
        let op = CreateColumn {
            defaults: Some(json!({"labels": {"1": "Done"}})),
            ..CreateColumn::new("9", "Status", ColumnType::Status)
        };
        insta::assert_snapshot!(
            op.render().unwrap(),
            @r#"mutation { create_column(board_id: "9", title: "Status", column_type: status, defaults: "{\"labels\":{\"1\":\"Done\"}}") { id title } }"#
        );
    }

    #[test]
    fn test_change_column_value() {
        let op = ChangeColumnValue {
            item_id: Some("200819371".to_string()),
            ..ChangeColumnValue::new("20178755", "status", json!({"index": 1}))
        };
        assert_eq!(
            op.render().unwrap(),
            r#"mutation { change_column_value(board_id: "20178755", column_id: "status", value: "{\"index\":1}", item_id: "200819371", create_labels_if_missing: false) { id name column_values { id text value } } }"#
        );
    }

    #[test]
    fn test_change_column_value_accepts_json_text() {
        let op = ChangeColumnValue::new("1", "text", r#"{"text":"hi"}"#);
        assert!(op
            .render()
            .unwrap()
            .contains(r#"value: "{\"text\":\"hi\"}""#));
    }
}
