//! The operation trait implemented by every resource call.

use std::path::{Path, PathBuf};

use monday_core::ArgumentError;

/// A renderable GraphQL operation.
///
/// Rendering validates arguments, so an invalid combination fails here and
/// never reaches the network.
pub trait Operation {
    /// Renders the complete query or mutation text.
    fn render(&self) -> Result<String, ArgumentError>;

    /// Returns the file to upload, if the operation carries one.
    ///
    /// Operations that return a path are sent to the file endpoint as a
    /// multipart request.
    fn upload(&self) -> Option<&Path> {
        None
    }
}

impl<O: Operation + ?Sized> Operation for Box<O> {
    fn render(&self) -> Result<String, ArgumentError> {
        (**self).render()
    }

    fn upload(&self) -> Option<&Path> {
        (**self).upload()
    }
}

/// Pre-built query text, optionally with a file for `$file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuery {
    pub query: String,
    pub file: Option<PathBuf>,
}

impl RawQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            file: None,
        }
    }

    /// Attaches a file to upload as the `$file` variable.
    #[must_use]
    pub fn with_upload(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

impl Operation for RawQuery {
    fn render(&self) -> Result<String, ArgumentError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(ArgumentError::invalid("query", "query text is empty"));
        }
        Ok(query.to_string())
    }

    fn upload(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}
