//! Folder queries and mutations.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{field, mutation, query};
use crate::operation::Operation;
use crate::types::{FolderColor, Ids};

const FOLDER_FIELDS: &str = "id name owner_id color created_at children { id name } \
    workspace { id name } parent { id name } sub_folders { id name }";

/// Returns metadata about one or a collection of folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFolders {
    pub ids: Option<Ids>,
    /// Page size, at most 100.
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub workspace_ids: Option<Ids>,
}

impl Default for FetchFolders {
    fn default() -> Self {
        Self {
            ids: None,
            limit: Some(25),
            page: Some(1),
            workspace_ids: None,
        }
    }
}

impl Operation for FetchFolders {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("ids", self.ids.clone())
            .with("limit", self.limit)
            .with("page", self.page)
            .with("workspace_ids", self.workspace_ids.clone());

        query(field("folders", &arguments, &ParameterOptions::new()).select(FOLDER_FIELDS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFolder {
    pub name: String,
    pub workspace_id: String,
    pub color: Option<FolderColor>,
    pub parent_folder_id: Option<String>,
}

impl CreateFolder {
    pub fn new(name: impl Into<String>, workspace_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workspace_id: workspace_id.into(),
            color: None,
            parent_folder_id: None,
        }
    }
}

impl Operation for CreateFolder {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("name", self.name.as_str())
            .with("workspace_id", self.workspace_id.as_str())
            .with("color", self.color)
            .with("parent_folder_id", self.parent_folder_id.clone());
        let options = ParameterOptions::new().literal("color");

        mutation(field("create_folder", &arguments, &options).select("id name"))
    }
}

/// Changes a folder's name, color or parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFolder {
    pub folder_id: String,
    pub name: Option<String>,
    pub color: Option<FolderColor>,
    pub parent_folder_id: Option<String>,
}

impl UpdateFolder {
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            name: None,
            color: None,
            parent_folder_id: None,
        }
    }
}

impl Operation for UpdateFolder {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("folder_id", self.folder_id.as_str())
            .with("name", self.name.clone())
            .with("color", self.color)
            .with("parent_folder_id", self.parent_folder_id.clone());
        let options = ParameterOptions::new().literal("color");

        mutation(
            field("update_folder", &arguments, &options)
                .select("id name color parent { id name }"),
        )
    }
}

/// Deletes a folder and everything in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFolder {
    pub folder_id: String,
}

impl DeleteFolder {
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
        }
    }
}

impl Operation for DeleteFolder {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("folder_id", self.folder_id.as_str());
        mutation(field("delete_folder", &arguments, &ParameterOptions::new()).select("id"))
    }
}
