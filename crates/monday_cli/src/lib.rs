//! Command-line interface for the monday.com API.
//!
//! # Usage
//!
//! ```bash
//! # Who owns this API key?
//! monday me
//!
//! # List active boards
//! monday boards --state active --limit 10
//!
//! # Run a raw query, or one stored in a file
//! monday query 'query { boards(limit: 1) { id name } }'
//! monday query --file board.graphql
//!
//! # Attach a file to an update
//! monday attach 12345 report.pdf
//!
//! # Print the query instead of sending it
//! monday --dry-run workspaces --kind open
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use monday_sdk::config::{API_KEY_VAR, API_URL_VAR, API_VERSION_VAR, FILE_URL_VAR};
use monday_sdk::resources::boards::FetchBoards;
use monday_sdk::resources::folders::FetchFolders;
use monday_sdk::resources::tags::FetchTags;
use monday_sdk::resources::teams::FetchTeams;
use monday_sdk::resources::updates::{AddFileToUpdate, FetchUpdates};
use monday_sdk::resources::users::{FetchCurrentUser, FetchUsers};
use monday_sdk::resources::versions::FetchVersions;
use monday_sdk::resources::workspaces::FetchWorkspaces;
use monday_sdk::types::{State, UserKind, WorkspaceKind};
use monday_sdk::{ClientConfig, Ids, MondayClient, MondayError, Operation, RawQuery};
use tracing::debug;

/// Exit code for a missing API key.
pub const EXIT_MISSING_KEY: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "monday")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key, sent as the Authorization header
    #[arg(long, env = API_KEY_VAR, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API version, e.g. 2024-01
    #[arg(long, env = API_VERSION_VAR, global = true)]
    pub api_version: Option<String>,

    /// Endpoint for general operations
    #[arg(long, env = API_URL_VAR, global = true)]
    pub endpoint: Option<String>,

    /// Endpoint for file uploads
    #[arg(long, env = FILE_URL_VAR, global = true)]
    pub file_endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the rendered operation without sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a raw GraphQL query or mutation
    Query {
        /// Query text
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        query: Option<String>,

        /// Read the query text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Upload a file as the `$file` variable
        #[arg(long)]
        upload: Option<PathBuf>,
    },

    /// Show the user that owns the API key
    Me,

    /// List available API versions
    Versions,

    /// List boards
    Boards {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        state: Option<State>,

        #[arg(long = "workspace", value_delimiter = ',')]
        workspace_ids: Vec<String>,
    },

    /// List workspaces
    Workspaces {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,

        #[arg(long)]
        kind: Option<WorkspaceKind>,

        #[arg(long)]
        state: Option<State>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// List users
    Users {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,

        #[arg(long)]
        kind: Option<UserKind>,

        /// Fuzzy match on name
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// List teams
    Teams {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,
    },

    /// List public tags
    Tags {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,
    },

    /// List folders
    Folders {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,

        #[arg(long = "workspace", value_delimiter = ',')]
        workspace_ids: Vec<String>,

        #[arg(long, default_value = "25")]
        limit: u32,
    },

    /// List updates
    Updates {
        #[arg(long = "id", value_delimiter = ',')]
        ids: Vec<String>,

        #[arg(long, default_value = "25")]
        limit: u32,
    },

    /// Attach a file to an update
    Attach {
        update_id: String,
        file: PathBuf,
    },
}

impl Cli {
    /// Builds the client configuration from the global options.
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.api_key.clone_from(&self.api_key);
        config.api_version.clone_from(&self.api_version);
        if let Some(endpoint) = &self.endpoint {
            config = config.api_url(endpoint.as_str());
        }
        if let Some(endpoint) = &self.file_endpoint {
            config = config.file_url(endpoint.as_str());
        }
        if let Some(secs) = self.timeout {
            config = config.timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "monday=debug"
        } else if self.quiet {
            "monday=error"
        } else {
            "monday=info"
        }
    }
}

fn ids(values: &[String]) -> Option<Ids> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().cloned().collect())
    }
}

/// Maps a subcommand to the operation it sends.
pub async fn operation(command: &Commands) -> Result<Box<dyn Operation>, Box<dyn Error>> {
    let op: Box<dyn Operation> = match command {
        Commands::Query {
            query,
            file,
            upload,
        } => {
            let text = match (query, file) {
                (Some(text), _) => text.clone(),
                (None, Some(path)) => tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| format!("failed to read `{}`: {e}", path.display()))?,
                (None, None) => return Err("no query given".into()),
            };
            let mut raw = RawQuery::new(text);
            if let Some(path) = upload {
                raw = raw.with_upload(path.clone());
            }
            Box::new(raw)
        }
        Commands::Me => Box::new(FetchCurrentUser),
        Commands::Versions => Box::new(FetchVersions),
        Commands::Boards {
            ids: board_ids,
            limit,
            page,
            state,
            workspace_ids,
        } => Box::new(FetchBoards {
            ids: ids(board_ids),
            limit: *limit,
            page: *page,
            state: *state,
            workspace_ids: ids(workspace_ids),
            ..Default::default()
        }),
        Commands::Workspaces {
            ids: workspace_ids,
            kind,
            state,
            limit,
        } => Box::new(FetchWorkspaces {
            ids: ids(workspace_ids),
            kind: *kind,
            state: *state,
            limit: *limit,
            ..Default::default()
        }),
        Commands::Users {
            ids: user_ids,
            kind,
            name,
            limit,
        } => Box::new(FetchUsers {
            ids: ids(user_ids),
            kind: *kind,
            name: name.clone(),
            limit: *limit,
            ..Default::default()
        }),
        Commands::Teams { ids: team_ids } => Box::new(FetchTeams { ids: ids(team_ids) }),
        Commands::Tags { ids: tag_ids } => Box::new(FetchTags { ids: ids(tag_ids) }),
        Commands::Folders {
            ids: folder_ids,
            workspace_ids,
            limit,
        } => Box::new(FetchFolders {
            ids: ids(folder_ids),
            workspace_ids: ids(workspace_ids),
            limit: Some(*limit),
            ..Default::default()
        }),
        Commands::Updates {
            ids: update_ids,
            limit,
        } => Box::new(FetchUpdates {
            ids: ids(update_ids),
            limit: Some(*limit),
            page: None,
        }),
        Commands::Attach { update_id, file } => {
            Box::new(AddFileToUpdate::new(update_id.as_str(), file.as_path()))
        }
    };
    Ok(op)
}

/// Runs the CLI and returns the process exit code.
pub async fn run(cli: Cli) -> Result<i32, Box<dyn Error>> {
    let op = operation(&cli.command).await?;

    if cli.dry_run {
        println!("{}", op.render()?);
        if let Some(path) = op.upload() {
            eprintln!("{} {}", "Upload".dimmed(), path.display());
        }
        return Ok(0);
    }

    let config = cli.config();
    if config.api_key.is_none() {
        eprintln!(
            "{} missing API key; pass --api-key or set {API_KEY_VAR}",
            "Error:".red().bold()
        );
        return Ok(EXIT_MISSING_KEY);
    }
    debug!("Using {:?}", config);

    let client = MondayClient::with_config(config)?;
    match client.send(op.as_ref()).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(0)
        }
        Err(MondayError::Api(err)) => {
            eprintln!("{} {}", "API error:".red().bold(), err.message);
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}
