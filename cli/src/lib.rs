//! Terminal client for the OpsLearn content API.
//!
//! Shares its models and view logic with the web frontend through
//! `opslearn-shared`.

pub mod cli;
pub mod client;
pub mod commands;
pub mod render;
