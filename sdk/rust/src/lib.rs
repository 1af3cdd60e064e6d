//! monday.com GraphQL SDK
//!
//! This crate provides an async client for the monday.com API and a catalog
//! of typed operations for boards, columns, groups, items, workspaces and
//! the rest of the API surface.
//!
//! # Client
//!
//! ```ignore
//! use monday_sdk::{ClientConfig, MondayClient};
//! use monday_sdk::resources::boards::FetchBoards;
//! use monday_sdk::types::State;
//!
//! let client = MondayClient::with_config(
//!     ClientConfig::new(api_key).api_version("2024-01"),
//! )?;
//!
//! let response = client
//!     .send(&FetchBoards {
//!         ids: Some(["1", "2"].into()),
//!         state: Some(State::Active),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! # File upload
//!
//! Operations that carry a file are sent to the file endpoint as multipart
//! requests:
//!
//! ```ignore
//! use monday_sdk::resources::updates::AddFileToUpdate;
//!
//! client.send(&AddFileToUpdate::new("12345", "report.pdf")).await?;
//! ```
//!
//! # Raw queries
//!
//! ```ignore
//! let me = client.execute("query { me { id name } }").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod resources;
pub mod types;

// Re-exports for convenience
pub use client::{interpret_response, GraphQLClient, MondayClient, Variables};
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind, MondayError, MondayResult};
pub use operation::{Operation, RawQuery};
pub use types::{Ids, UnknownVariant};

// Core re-exports
pub use monday_core::{ArgumentError, Arguments, ParameterOptions};
