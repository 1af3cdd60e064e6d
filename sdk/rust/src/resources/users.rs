//! User queries and board subscriptions.

use monday_core::{ArgumentError, Arguments, Field, ParameterOptions};

use super::{field, mutation, query};
use crate::operation::Operation;
use crate::types::{Ids, SubscriberKind, UserKind};

const USER_FIELDS: &str = "id birthday country_code created_at current_language email enabled \
    is_admin is_guest is_pending is_verified is_view_only join_date last_activity location \
    mobile_phone name out_of_office { active disable_notifications end_date start_date type } \
    phone photo_original photo_small teams { id name } time_zone_identifier title url \
    utc_hours_diff";

const CURRENT_USER_FIELDS: &str = "birthday country_code created_at join_date email enabled id \
    is_admin is_guest is_pending is_view_only location mobile_phone name phone photo_original \
    photo_small teams { id name } time_zone_identifier title url utc_hours_diff";

/// Returns users of the account, members and guests alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchUsers {
    pub emails: Option<Vec<String>>,
    pub ids: Option<Ids>,
    pub kind: Option<UserKind>,
    pub limit: Option<u32>,
    /// Fuzzy match on the user's name.
    pub name: Option<String>,
    pub page: Option<u32>,
    pub newest_first: Option<bool>,
    pub non_active: Option<bool>,
}

impl Operation for FetchUsers {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("emails", self.emails.clone())
            .with("ids", self.ids.clone())
            .with("kind", self.kind)
            .with("limit", self.limit)
            .with("name", self.name.clone())
            .with("page", self.page)
            .with("newest_first", self.newest_first)
            .with("non_active", self.non_active);
        let options = ParameterOptions::new().literal("kind");

        query(field("users", &arguments, &options).select(USER_FIELDS))
    }
}

/// Returns the user that owns the API key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchCurrentUser;

impl Operation for FetchCurrentUser {
    fn render(&self) -> Result<String, ArgumentError> {
        query(Field::new("me").select(CURRENT_USER_FIELDS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUsersToBoard {
    pub board_id: String,
    pub user_ids: Ids,
    pub kind: Option<SubscriberKind>,
}

impl AddUsersToBoard {
    pub fn new(board_id: impl Into<String>, user_ids: impl Into<Ids>) -> Self {
        Self {
            board_id: board_id.into(),
            user_ids: user_ids.into(),
            kind: None,
        }
    }
}

impl Operation for AddUsersToBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("user_ids", self.user_ids.clone())
            .with("kind", self.kind);
        let options = ParameterOptions::new().literal("kind");

        mutation(field("add_users_to_board", &arguments, &options).select("id"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSubscribersFromBoard {
    pub board_id: String,
    pub user_ids: Ids,
}

impl DeleteSubscribersFromBoard {
    pub fn new(board_id: impl Into<String>, user_ids: impl Into<Ids>) -> Self {
        Self {
            board_id: board_id.into(),
            user_ids: user_ids.into(),
        }
    }
}

impl Operation for DeleteSubscribersFromBoard {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("user_ids", self.user_ids.clone());

        mutation(
            field("delete_subscribers_from_board", &arguments, &ParameterOptions::new())
                .select("id"),
        )
    }
}
