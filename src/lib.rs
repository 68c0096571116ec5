//! twig: the command surface of a version control tool
//!
//! - `cli`: root dispatcher and the registry of subcommands
//! - `commands`: subcommand handlers
//! - `errors`: failures reported by handlers
//! - `logging`: tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logging;
