//! Item updates, replies and attachments.

use std::path::{Path, PathBuf};

use monday_core::{format_argument, ArgumentError, Arguments, Document, Field, ParameterOptions};
use serde_json::Value;

use super::{field, mutation, query};
use crate::operation::Operation;
use crate::types::Ids;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchUpdates {
    pub ids: Option<Ids>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Default for FetchUpdates {
    fn default() -> Self {
        Self {
            ids: None,
            limit: Some(25),
            page: None,
        }
    }
}

impl Operation for FetchUpdates {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("ids", self.ids.clone())
            .with("limit", self.limit)
            .with("page", self.page);

        query(
            field("updates", &arguments, &ParameterOptions::new())
                .select("id body created_at creator { name id }"),
        )
    }
}

/// Posts an update on an item, or a reply when `parent_id` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUpdate {
    pub item_id: String,
    pub body: String,
    pub parent_id: Option<String>,
}

impl CreateUpdate {
    pub fn new(item_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            body: body.into(),
            parent_id: None,
        }
    }
}

impl Operation for CreateUpdate {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("item_id", self.item_id.as_str())
            .with("body", self.body.as_str())
            .with("parent_id", self.parent_id.clone());

        mutation(field("create_update", &arguments, &ParameterOptions::new()).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeUpdate {
    pub update_id: String,
}

impl LikeUpdate {
    pub fn new(update_id: impl Into<String>) -> Self {
        Self {
            update_id: update_id.into(),
        }
    }
}

impl Operation for LikeUpdate {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("update_id", self.update_id.as_str());
        mutation(field("like_update", &arguments, &ParameterOptions::new()).select("id"))
    }
}

/// Removes every update on an item, replies and likes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearItemUpdates {
    pub item_id: String,
}

impl ClearItemUpdates {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }
}

impl Operation for ClearItemUpdates {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("item_id", self.item_id.as_str());
        mutation(field("clear_item_updates", &arguments, &ParameterOptions::new()).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUpdate {
    pub update_id: String,
}

impl DeleteUpdate {
    pub fn new(update_id: impl Into<String>) -> Self {
        Self {
            update_id: update_id.into(),
        }
    }
}

impl Operation for DeleteUpdate {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("update_id", self.update_id.as_str());
        mutation(field("delete_update", &arguments, &ParameterOptions::new()).select("id"))
    }
}

/// Attaches a local file to an update.
///
/// Sent to the file endpoint as a multipart request; the file is bound to
/// the `$file` variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFileToUpdate {
    pub update_id: String,
    pub file: PathBuf,
}

impl AddFileToUpdate {
    pub fn new(update_id: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            update_id: update_id.into(),
            file: file.into(),
        }
    }
}

impl Operation for AddFileToUpdate {
    fn render(&self) -> Result<String, ArgumentError> {
        let update_id = Value::String(self.update_id.clone());
        let attach = Field::new("add_file_to_update")
            .argument(format_argument("update_id", &update_id, false))
            .argument("file: $file")
            .select("id");

        Ok(Document::mutation(attach).variable("$file: File!").render())
    }

    fn upload(&self) -> Option<&Path> {
        Some(&self.file)
    }
}
