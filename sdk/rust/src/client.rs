//! monday.com GraphQL client.
//!
//! [`GraphQLClient`] owns the wire transport for a single endpoint: it sends a
//! query as a JSON body, or as a multipart form when a `file` variable is
//! present, and turns error payloads into [`MondayError::Api`].
//! [`MondayClient`] pairs a general client with a file-upload client and runs
//! [`Operation`]s against the right one.
//!
//! # Example
//!
//! ```ignore
//! use monday_sdk::{MondayClient, resources::boards::FetchBoards, types::State};
//!
//! let client = MondayClient::new("api-key")?;
//! let boards = client
//!     .send(&FetchBoards { limit: Some(5), state: Some(State::Active), ..Default::default() })
//!     .await?;
//! ```

use std::path::{Path, PathBuf};

use monday_core::ArgumentError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, MondayError, MondayResult};
use crate::operation::Operation;

const API_VERSION: HeaderName = HeaderName::from_static("api-version");

/// Multipart field name for the uploaded file.
pub const FILE_FIELD: &str = "variables[file]";

/// Operation variables.
///
/// Only the `file` entry is interpreted: it names a file to upload. Other
/// entries are accepted but not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: Map<String, Value>,
    file: Option<PathBuf>,
}

impl Variables {
    /// Creates an empty variables map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates variables holding a single file reference.
    ///
    /// The path is kept as given, so paths that are not valid UTF-8 still
    /// reach the file system unchanged.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            values: Map::new(),
            file: Some(path.into()),
        }
    }

    /// Adds a variable.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if name == "file" {
            self.file = None;
        }
        self.values.insert(name, value.into());
        self
    }

    /// Returns a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the upload path, if a `file` variable is set.
    pub fn file_path(&self) -> Result<Option<PathBuf>, ArgumentError> {
        if let Some(path) = &self.file {
            return Ok(Some(path.clone()));
        }
        match self.values.get("file") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(path)) => Ok(Some(PathBuf::from(path))),
            Some(other) => Err(ArgumentError::invalid(
                "file",
                format!("expected a path string, got {other}"),
            )),
        }
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(values: Map<String, Value>) -> Self {
        Self { values, file: None }
    }
}

#[derive(Debug, Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

/// GraphQL executor for one endpoint.
///
/// Holds only static configuration, so clones share the connection pool and
/// concurrent calls do not interfere.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphQLClient {
    /// Creates a client for `endpoint` using the credentials and timeout in `config`.
    pub fn new(endpoint: impl Into<String>, config: &ClientConfig) -> MondayResult<Self> {
        let http = reqwest::Client::builder()
            .default_headers(default_headers(config)?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a query or mutation and returns the decoded response body.
    pub async fn execute(&self, query: &str, variables: Option<&Variables>) -> MondayResult<Value> {
        let upload = match variables {
            Some(variables) => variables.file_path()?,
            None => None,
        };

        let request = self.http.post(&self.endpoint);
        let request = match &upload {
            Some(path) => request.multipart(upload_form(query, path).await?),
            None => request.json(&QueryBody { query }),
        };

        debug!(
            "Sending {} request to {}: {}",
            if upload.is_some() { "multipart" } else { "JSON" },
            self.endpoint,
            query.chars().take(100).collect::<String>()
        );

        let response = request.send().await?;
        debug!("Response status: {}", response.status());
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        let result = interpret_response(body);
        if let Err(MondayError::Api(api)) = &result {
            warn!("API error from {}: {}", self.endpoint, api.message);
        }
        result
    }
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap, ArgumentError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &config.api_key {
        let mut value = HeaderValue::from_str(api_key)
            .map_err(|e| ArgumentError::invalid("api_key", e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    if let Some(api_version) = &config.api_version {
        let value = HeaderValue::from_str(api_version)
            .map_err(|e| ArgumentError::invalid("api_version", e.to_string()))?;
        headers.insert(API_VERSION, value);
    }
    Ok(headers)
}

/// Reads the upload file and builds the multipart body.
///
/// The file is read whole; its handle is closed before the request is sent.
async fn upload_form(query: &str, path: &Path) -> MondayResult<Form> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| MondayError::File {
            path: path.to_path_buf(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned();

    let part = Part::bytes(contents).file_name(file_name);
    Ok(Form::new()
        .text("query", query.to_string())
        .part(FILE_FIELD, part))
}

/// Classifies a decoded response body.
///
/// A non-empty `errors` array fails with its first entry; otherwise a
/// top-level `error_message` key fails the call whatever its value; otherwise
/// the body is returned unchanged.
pub fn interpret_response(body: Value) -> MondayResult<Value> {
    match body.get("errors") {
        None | Some(Value::Null) => {}
        Some(Value::Array(errors)) => {
            if let Some(first) = errors.first() {
                return Err(ApiError::from_entry(first).into());
            }
        }
        Some(other) => return Err(ApiError::from_entry(other).into()),
    }

    match body.get("error_message") {
        None => Ok(body),
        Some(message) => Err(ApiError::from_error_message(message).into()),
    }
}

/// The monday.com client.
///
/// General operations go to the API endpoint; operations that upload a file
/// go to the file endpoint.
#[derive(Debug, Clone)]
pub struct MondayClient {
    api: GraphQLClient,
    files: GraphQLClient,
}

impl MondayClient {
    /// Creates a client with an API key and default settings.
    pub fn new(api_key: impl Into<String>) -> MondayResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a client with configuration.
    pub fn with_config(config: ClientConfig) -> MondayResult<Self> {
        Ok(Self {
            api: GraphQLClient::new(config.api_url.clone(), &config)?,
            files: GraphQLClient::new(config.file_url.clone(), &config)?,
        })
    }

    /// Creates a client configured from `MONDAY_*` environment variables.
    pub fn from_env() -> MondayResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Returns the general-purpose executor.
    pub fn api(&self) -> &GraphQLClient {
        &self.api
    }

    /// Returns the file-upload executor.
    pub fn files(&self) -> &GraphQLClient {
        &self.files
    }

    /// Renders and executes an operation.
    ///
    /// Argument errors are returned before any request is made.
    pub async fn send<O: Operation + ?Sized>(&self, operation: &O) -> MondayResult<Value> {
        let query = operation.render()?;
        match operation.upload() {
            Some(path) => {
                let variables = Variables::file(path);
                self.files.execute(&query, Some(&variables)).await
            }
            None => self.api.execute(&query, None).await,
        }
    }

    /// Executes an operation and deserializes its `data` payload.
    pub async fn send_as<T, O>(&self, operation: &O) -> MondayResult<T>
    where
        T: DeserializeOwned,
        O: Operation + ?Sized,
    {
        let mut body = self.send(operation).await?;
        let data = body.get_mut("data").map(Value::take).unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// Executes a raw query against the API endpoint.
    pub async fn execute(&self, query: &str) -> MondayResult<Value> {
        self.api.execute(query, None).await
    }

    /// Executes a raw mutation that uploads `path` as its `$file` variable.
    pub async fn upload(&self, query: &str, path: impl AsRef<Path>) -> MondayResult<Value> {
        self.files
            .execute(query, Some(&Variables::file(path.as_ref())))
            .await
    }
}
