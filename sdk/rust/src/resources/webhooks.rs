//! Webhook queries and mutations.
//!
//! Webhooks can only be queried at the root, never nested.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{field, mutation, query};
use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchWebhooks {
    pub board_id: String,
    /// Only webhooks created by the calling app.
    pub app_webhooks_only: Option<bool>,
}

impl FetchWebhooks {
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            app_webhooks_only: None,
        }
    }
}

impl Operation for FetchWebhooks {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new()
            .with("board_id", self.board_id.as_str())
            .with("app_webhooks_only", self.app_webhooks_only);

        query(
            field("webhooks", &arguments, &ParameterOptions::new())
                .select("id event board_id config"),
        )
    }
}

/// Deletes a webhook; it stops reporting events immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteWebhook {
    pub webhook_id: String,
}

impl DeleteWebhook {
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
        }
    }
}

impl Operation for DeleteWebhook {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("id", self.webhook_id.as_str());
        mutation(field("delete_webhook", &arguments, &ParameterOptions::new()).select("id board_id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_webhooks() {
        assert_eq!(
            FetchWebhooks::new("1").render().unwrap(),
            r#"query { webhooks(board_id: "1") { id event board_id config } }"#
        );

        let op = FetchWebhooks {
            app_webhooks_only: Some(true),
            ..FetchWebhooks::new("1")
        };
        assert_eq!(
            op.render().unwrap(),
            r#"query { webhooks(board_id: "1", app_webhooks_only: true) { id event board_id config } }"#
        );
    }

    #[test]
    fn test_delete_webhook() {
        assert_eq!(
            DeleteWebhook::new("11").render().unwrap(),
            r#"mutation { delete_webhook(id: "11") { id board_id } }"#
        );
    }
}
