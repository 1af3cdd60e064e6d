//! Bell notifications.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{field, mutation};
use crate::operation::Operation;
use crate::types::NotificationTargetType;

/// Sends a notification to a user's bell icon.
///
/// Notifications are delivered asynchronously, so the response does not
/// carry a notification ID. Depending on the recipient's preferences an
/// email may be sent as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNotification {
    pub user_id: String,
    /// An item or board for `Project`, an update or reply for `Post`.
    pub target_id: String,
    pub text: String,
    pub target_type: NotificationTargetType,
}

impl CreateNotification {
    pub fn new(
        user_id: impl Into<String>,
        target_id: impl Into<String>,
        text: impl Into<String>,
        target_type: NotificationTargetType,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            target_id: target_id.into(),
            text: text.into(),
            target_type,
        }
    }
}

impl Operation for CreateNotification {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("user_id", self.user_id.as_str())
            .with("target_id", self.target_id.as_str())
            .with("text", self.text.as_str())
            .with("target_type", self.target_type);
        let options = ParameterOptions::new().literal("target_type");

        mutation(field("create_notification", &arguments, &options).select("text"))
    }
}
