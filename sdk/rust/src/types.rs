//! Enum tokens and identifier lists used by the resource catalog.
//!
//! Enum values are rendered raw into query text (`state: active`), so every
//! variant maps to exactly one GraphQL enum member.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// A string that does not name a variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`, expected one of: {expected}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! graphql_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )+];

            /// Returns the GraphQL enum member.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok(Self::$variant), )+
                    _ => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: [$( $token, )+].join(", "),
                    }),
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::String(value.as_str().to_string())
            }
        }
    };
}

graphql_enum! {
    /// Board visibility.
    BoardKind {
        Private => "private",
        Public => "public",
        Share => "share",
    }
}

graphql_enum! {
    /// Board attributes accepted by `update_board`.
    BoardAttribute {
        Communication => "communication",
        Description => "description",
        Name => "name",
    }
}

graphql_enum! {
    /// Lifecycle state filter for boards and workspaces.
    State {
        Active => "active",
        All => "all",
        Archived => "archived",
        Deleted => "deleted",
    }
}

graphql_enum! {
    OrderBy {
        CreatedAt => "created_at",
        UsedAt => "used_at",
    }
}

graphql_enum! {
    /// What `duplicate_board` copies.
    DuplicateBoardType {
        WithStructure => "duplicate_board_with_structure",
        WithPulses => "duplicate_board_with_pulses",
        WithPulsesAndUpdates => "duplicate_board_with_pulses_and_updates",
    }
}

impl Default for DuplicateBoardType {
    fn default() -> Self {
        Self::WithPulsesAndUpdates
    }
}

graphql_enum! {
    /// Subscription role on a board or workspace.
    SubscriberKind {
        Owner => "owner",
        Subscriber => "subscriber",
    }
}

impl Default for SubscriberKind {
    fn default() -> Self {
        Self::Subscriber
    }
}

graphql_enum! {
    /// User filter for `users`.
    UserKind {
        All => "all",
        NonGuests => "non_guests",
        Guests => "guests",
        NonPending => "non_pending",
    }
}

graphql_enum! {
    WorkspaceKind {
        Open => "open",
        Closed => "closed",
    }
}

graphql_enum! {
    /// Notification target: an item or board (`Project`) or an update (`Post`).
    NotificationTargetType {
        Project => "Project",
        Post => "Post",
    }
}

graphql_enum! {
    /// Column types accepted by `create_column` and the `columns` filter.
    ColumnType {
        AutoNumber => "auto_number",
        BoardRelation => "board_relation",
        Button => "button",
        Checkbox => "checkbox",
        ColorPicker => "color_picker",
        Country => "country",
        CreationLog => "creation_log",
        Date => "date",
        Dependency => "dependency",
        Doc => "doc",
        Dropdown => "dropdown",
        Email => "email",
        File => "file",
        Formula => "formula",
        Hour => "hour",
        ItemAssignees => "item_assignees",
        ItemId => "item_id",
        LastUpdated => "last_updated",
        Link => "link",
        Location => "location",
        LongText => "long_text",
        Mirror => "mirror",
        Name => "name",
        Numbers => "numbers",
        People => "people",
        Phone => "phone",
        Progress => "progress",
        Rating => "rating",
        Status => "status",
        Subtasks => "subtasks",
        Tags => "tags",
        Team => "team",
        Text => "text",
        Timeline => "timeline",
        TimeTracking => "time_tracking",
        Vote => "vote",
        Week => "week",
        WorldClock => "world_clock",
        Unsupported => "unsupported",
    }
}

graphql_enum! {
    FolderColor {
        Aquamarine => "AQUAMARINE",
        BrightBlue => "BRIGHT_BLUE",
        BrightGreen => "BRIGHT_GREEN",
        ChiliBlue => "CHILI_BLUE",
        DarkOrange => "DARK_ORANGE",
        DarkPurple => "DARK_PURPLE",
        DarkRed => "DARK_RED",
        DoneGreen => "DONE_GREEN",
        Indigo => "INDIGO",
        Lipstick => "LIPSTICK",
        Purple => "PURPLE",
        SofiaPink => "SOFIA_PINK",
        StuckRed => "STUCK_RED",
        Sunset => "SUNSET",
        WorkingOrange => "WORKING_ORANGE",
    }
}

graphql_enum! {
    /// Group attributes accepted by `update_group`.
    GroupAttribute {
        Color => "color",
        Position => "position",
        RelativePositionAfter => "relative_position_after",
        RelativePositionBefore => "relative_position_before",
        Title => "title",
    }
}

graphql_enum! {
    /// Placement of a new group relative to `relative_to`.
    PositionRelativeMethod {
        BeforeAt => "before_at",
        AfterAt => "after_at",
    }
}

/// One or more IDs, always sent as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ids(pub Vec<String>);

impl Ids {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Ids {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for Ids {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<u64> for Ids {
    fn from(id: u64) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<Vec<String>> for Ids {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<Vec<&str>> for Ids {
    fn from(ids: Vec<&str>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<&[&str]> for Ids {
    fn from(ids: &[&str]) -> Self {
        ids.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Ids {
    fn from(ids: [&str; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Ids {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Ids> for Value {
    fn from(ids: Ids) -> Self {
        Value::Array(ids.0.into_iter().map(Value::String).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_tokens() {
        assert_eq!(State::Active.as_str(), "active");
        assert_eq!(OrderBy::CreatedAt.to_string(), "created_at");
        assert_eq!(FolderColor::DoneGreen.as_str(), "DONE_GREEN");
        assert_eq!(NotificationTargetType::Project.as_str(), "Project");
        assert_eq!(ColumnType::ALL.len(), 39);
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("share".parse::<BoardKind>(), Ok(BoardKind::Share));
        assert_eq!(
            "time_tracking".parse::<ColumnType>(),
            Ok(ColumnType::TimeTracking)
        );

        let err = "shared".parse::<BoardKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown BoardKind `shared`, expected one of: private, public, share"
        );
    }

    #[test]
    fn test_every_token_parses_back() {
        for kind in ColumnType::ALL {
            assert_eq!(kind.as_str().parse::<ColumnType>(), Ok(*kind));
        }
        for color in FolderColor::ALL {
            assert_eq!(color.as_str().parse::<FolderColor>(), Ok(*color));
        }
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(
            DuplicateBoardType::default().as_str(),
            "duplicate_board_with_pulses_and_updates"
        );
        assert_eq!(SubscriberKind::default(), SubscriberKind::Subscriber);
    }

    #[test]
    fn test_enum_into_value() {
        assert_eq!(Value::from(UserKind::NonGuests), json!("non_guests"));
        assert_eq!(Value::from(None::<UserKind>), Value::Null);
    }

    #[test]
    fn test_ids() {
        assert_eq!(Value::from(Ids::from("1")), json!(["1"]));
        assert_eq!(Value::from(Ids::from(42_u64)), json!(["42"]));
        assert_eq!(Value::from(Ids::from(["1", "2"])), json!(["1", "2"]));
        assert_eq!(
            Value::from(Ids::from(vec!["a".to_string()])),
            json!(["a"])
        );
        assert!(Ids::default().is_empty());
    }
}
