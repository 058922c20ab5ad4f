//! Compose file parsing and service selection
//!
//! This module reads a Docker Compose YAML document into an ordered list
//! of typed service records.

pub mod config;
pub mod parser;
pub mod select;

pub use config::ServiceConfig;
pub use parser::ComposeParser;
pub use select::select_service;
