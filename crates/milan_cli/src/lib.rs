//! Support modules for the `milan` binary: configuration, logging setup
//! and output rendering.

pub mod config;
pub mod logging;
pub mod render;
