//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod render;
mod view;

pub use render::{RenderConfig, apply_events, run_render};
pub use view::run_view;
