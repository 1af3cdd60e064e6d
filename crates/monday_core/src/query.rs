//! GraphQL operation text assembly.
//!
//! Operations are rendered on a single line:
//!
//! ```text
//! query { boards(ids: ["1"], state: active) { id name } }
//! mutation ($file: File!) { add_file_to_update(update_id: "7", file: $file) { id } }
//! ```

use std::fmt;

use crate::params::argument_list;

/// Root operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Returns the GraphQL keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field with its argument fragments and selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    arguments: Vec<String>,
    selection: Vec<String>,
}

impl Field {
    /// Creates a field with no arguments and no selection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            selection: Vec::new(),
        }
    }

    /// Appends argument fragments.
    #[must_use]
    pub fn arguments(mut self, fragments: impl IntoIterator<Item = String>) -> Self {
        self.arguments.extend(fragments);
        self
    }

    /// Appends a single argument fragment.
    #[must_use]
    pub fn argument(mut self, fragment: impl Into<String>) -> Self {
        self.arguments.push(fragment.into());
        self
    }

    /// Appends selection text such as `id name creator { id }`.
    #[must_use]
    pub fn select(mut self, fields: &str) -> Self {
        let fields = fields.trim();
        if !fields.is_empty() {
            self.selection.push(fields.to_string());
        }
        self
    }

    /// Appends a nested field to the selection.
    #[must_use]
    pub fn child(mut self, field: Field) -> Self {
        self.selection.push(field.render());
        self
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders `name(args) { selection }`, omitting empty parts.
    pub fn render(&self) -> String {
        let mut out = self.name.clone();
        out.push_str(&argument_list(&self.arguments));
        if !self.selection.is_empty() {
            out.push_str(" { ");
            out.push_str(&self.selection.join(" "));
            out.push_str(" }");
        }
        out
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A complete executable document: one query or mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    kind: OperationKind,
    variables: Vec<String>,
    fields: Vec<Field>,
}

impl Document {
    /// Creates a query with a single root field.
    pub fn query(field: Field) -> Self {
        Self::new(OperationKind::Query, field)
    }

    /// Creates a mutation with a single root field.
    pub fn mutation(field: Field) -> Self {
        Self::new(OperationKind::Mutation, field)
    }

    fn new(kind: OperationKind, field: Field) -> Self {
        Self {
            kind,
            variables: Vec::new(),
            fields: vec![field],
        }
    }

    /// Declares an operation variable, e.g. `$file: File!`.
    #[must_use]
    pub fn variable(mut self, declaration: impl Into<String>) -> Self {
        self.variables.push(declaration.into());
        self
    }

    /// Adds another root field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Renders the operation text.
    pub fn render(&self) -> String {
        let mut out = self.kind.as_str().to_string();
        if !self.variables.is_empty() {
            out.push_str(" (");
            out.push_str(&self.variables.join(", "));
            out.push(')');
        }
        out.push_str(" { ");
        let fields: Vec<String> = self.fields.iter().map(Field::render).collect();
        out.push_str(&fields.join(" "));
        out.push_str(" }");
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
