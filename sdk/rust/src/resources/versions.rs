//! API version metadata.

use monday_core::{ArgumentError, Field};

use super::query;
use crate::operation::Operation;

const VERSION_FIELDS: &str = "kind value display_name";

/// Lists every available API version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchVersions;

impl Operation for FetchVersions {
    fn render(&self) -> Result<String, ArgumentError> {
        query(Field::new("versions").select(VERSION_FIELDS))
    }
}

/// Describes the API version serving the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchVersion;

impl Operation for FetchVersion {
    fn render(&self) -> Result<String, ArgumentError> {
        query(Field::new("version").select(VERSION_FIELDS))
    }
}
