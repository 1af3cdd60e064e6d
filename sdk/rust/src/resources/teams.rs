//! Team queries.

use monday_core::{ArgumentError, Arguments, ParameterOptions};

use super::{field, query};
use crate::operation::Operation;
use crate::types::Ids;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTeams {
    pub ids: Option<Ids>,
}

impl Operation for FetchTeams {
    fn render(&self) -> Result<String, ArgumentError> {
        let arguments = Arguments::new().with("ids", self.ids.clone());
        query(
            field("teams", &arguments, &ParameterOptions::new())
                .select("id name picture_url owners { id name } users { id email name }"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_teams() {
        insta::assert_snapshot!(
            FetchTeams { ids: Some(3_u64.into()) }.render().unwrap(),
            @r#"query { teams(ids: ["3"]) { id name picture_url owners { id name } users { id email name } } }"#
        );
    }
}
