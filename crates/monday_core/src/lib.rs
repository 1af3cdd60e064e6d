//! Core utilities for the monday.com client.
//!
//! This crate provides the pieces every API operation is built from:
//! - `arguments`: Ordered argument sets with absent-value semantics
//! - `params`: Parameter serialization into GraphQL argument fragments
//! - `query`: Field and operation text assembly
//! - `error`: Argument validation errors

pub mod arguments;
pub mod error;
pub mod params;
pub mod query;

pub use arguments::Arguments;
pub use error::ArgumentError;
pub use params::{
    argument_list, format_argument, format_parameters, input_object, json_string,
    ParameterOptions, RESERVED_KEYS,
};
pub use query::{Document, Field, OperationKind};
