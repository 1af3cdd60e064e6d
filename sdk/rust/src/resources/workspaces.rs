//! Workspace queries and mutations.

use monday_core::{
    format_parameters, input_object, ArgumentError, Arguments, Field, ParameterOptions,
};

use super::{field, mutation, query};
use crate::operation::Operation;
use crate::types::{Ids, OrderBy, State, SubscriberKind, WorkspaceKind};

const WORKSPACE_FIELDS: &str = "id name account_product { id kind } created_at description \
    is_default_workspace kind owners_subscribers { id name email } state \
    team_owners_subscribers { id name } teams_subscribers { id name } \
    users_subscribers { id name email }";

const WORKSPACE_SUMMARY: &str = "id name kind description";

/// Returns one or a collection of workspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchWorkspaces {
    pub ids: Option<Ids>,
    pub kind: Option<WorkspaceKind>,
    pub limit: Option<u32>,
    pub state: Option<State>,
    /// Only `created_at` is accepted for workspaces.
    pub order_by: Option<OrderBy>,
    pub page: Option<u32>,
}

impl Operation for FetchWorkspaces {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("ids", self.ids.clone())
            .with("kind", self.kind)
            .with("limit", self.limit)
            .with("state", self.state)
            .with("order_by", self.order_by)
            .with("page", self.page);
        let options = ParameterOptions::new().literals(["kind", "state", "order_by"]);

        query(field("workspaces", &arguments, &options).select(WORKSPACE_FIELDS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkspace {
    pub name: String,
    pub kind: WorkspaceKind,
    pub description: Option<String>,
}

impl CreateWorkspace {
    pub fn new(name: impl Into<String>, kind: WorkspaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
        }
    }
}

impl Operation for CreateWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("name", self.name.as_str())
            .with("kind", self.kind)
            .with("description", self.description.clone());
        let options = ParameterOptions::new().literal("kind");

        mutation(field("create_workspace", &arguments, &options).select(WORKSPACE_SUMMARY))
    }
}

/// Workspace attributes that can be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceAttributes {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<WorkspaceKind>,
}

impl WorkspaceAttributes {
    /// Renders the attributes as a GraphQL input object.
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("name", self.name.clone())
            .with("description", self.description.clone())
            .with("kind", self.kind);
        let fragments = format_parameters(&arguments, &ParameterOptions::new().literal("kind"));
        if fragments.is_empty() {
            return Err(ArgumentError::invalid(
                "attributes",
                "at least one attribute must be set",
            ));
        }
        Ok(input_object(&fragments))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWorkspace {
    pub workspace_id: String,
    pub attributes: WorkspaceAttributes,
}

impl UpdateWorkspace {
    pub fn new(workspace_id: impl Into<String>, attributes: WorkspaceAttributes) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            attributes,
        }
    }
}

impl Operation for UpdateWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("id", self.workspace_id.as_str())
            .with("attributes", self.attributes.render()?);
        let options = ParameterOptions::new().literal("attributes");

        mutation(field("update_workspace", &arguments, &options).select(WORKSPACE_SUMMARY))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteWorkspace {
    pub workspace_id: String,
}

impl DeleteWorkspace {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
        }
    }
}

impl Operation for DeleteWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("workspace_id", self.workspace_id.as_str());
        mutation(field("delete_workspace", &arguments, &ParameterOptions::new()).select("id"))
    }
}

/// Membership change for a list of users or teams.
fn membership(
    name: &str,
    workspace_id: &str,
    ids_key: &str,
    ids: &Ids,
    kind: Option<SubscriberKind>,
) -> Field {
    let arguments = Arguments::new()
        .with("workspace_id", workspace_id)
        .with(ids_key, ids.clone())
        .with("kind", kind);
    field(name, &arguments, &ParameterOptions::new().literal("kind")).select("id")
}

/// Adds users to a workspace as subscribers or owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUsersToWorkspace {
    pub workspace_id: String,
    pub user_ids: Ids,
    pub kind: SubscriberKind,
}

impl AddUsersToWorkspace {
    pub fn new(workspace_id: impl Into<String>, user_ids: impl Into<Ids>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            user_ids: user_ids.into(),
            kind: SubscriberKind::default(),
        }
    }
}

impl Operation for AddUsersToWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        mutation(membership(
            "add_users_to_workspace",
            &self.workspace_id,
            "user_ids",
            &self.user_ids,
            Some(self.kind),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUsersFromWorkspace {
    pub workspace_id: String,
    pub user_ids: Ids,
}

impl DeleteUsersFromWorkspace {
    pub fn new(workspace_id: impl Into<String>, user_ids: impl Into<Ids>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            user_ids: user_ids.into(),
        }
    }
}

impl Operation for DeleteUsersFromWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        mutation(membership(
            "delete_users_from_workspace",
            &self.workspace_id,
            "user_ids",
            &self.user_ids,
            None,
        ))
    }
}

/// Adds teams to a workspace as subscribers or owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTeamsToWorkspace {
    pub workspace_id: String,
    pub team_ids: Ids,
    pub kind: SubscriberKind,
}

impl AddTeamsToWorkspace {
    pub fn new(workspace_id: impl Into<String>, team_ids: impl Into<Ids>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            team_ids: team_ids.into(),
            kind: SubscriberKind::default(),
        }
    }
}

impl Operation for AddTeamsToWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        mutation(membership(
            "add_teams_to_workspace",
            &self.workspace_id,
            "team_ids",
            &self.team_ids,
            Some(self.kind),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTeamsFromWorkspace {
    pub workspace_id: String,
    pub team_ids: Ids,
}

impl DeleteTeamsFromWorkspace {
    pub fn new(workspace_id: impl Into<String>, team_ids: impl Into<Ids>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            team_ids: team_ids.into(),
        }
    }
}

impl Operation for DeleteTeamsFromWorkspace {
    fn render(&self) -> Result<String, ArgumentError> {
        mutation(membership(
            "delete_teams_from_workspace",
            &self.workspace_id,
            "team_ids",
            &self.team_ids,
            None,
        ))
    }
}
