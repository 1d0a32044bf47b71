//! CLI command handlers for the campus advisor.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod chat;
pub mod config;
pub mod plan;
