//! infinidisc CLI library.
//!
//! One-shot generation commands, the HTTP catalog server, and the
//! configuration and logging they share.

pub mod commands;
pub mod config;
pub mod json_output;
pub mod logging;
pub mod server;
