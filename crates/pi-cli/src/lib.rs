//! Library components for the `path-icons` CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
