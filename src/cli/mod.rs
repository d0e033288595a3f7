//! Command-line interface: clap definitions and command handlers.

pub mod args;
pub mod commands;
