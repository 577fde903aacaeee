//! Tool adapter exposing the notes REST API to tool-calling agents over MCP.

pub mod client;
pub mod config;
pub mod server;
