//! View command handler.
//!
//! Implements the `view` subcommand: the interactive dashboard.

use crate::config::TuiConfig;
use crate::tui::{DashboardApp, run_dashboard_tui};
use anyhow::{Context, Result};

/// Run the view command
pub fn run_view(config: &TuiConfig) -> Result<()> {
    let mut app = DashboardApp::default();
    tracing::debug!(
        theme = %config.theme,
        tick_rate_ms = config.tick_rate_ms,
        "starting dashboard"
    );

    run_dashboard_tui(&mut app, config).context("terminal UI failed")?;

    let state = app.state();
    tracing::debug!(
        tab = %state.active_tab,
        connected = state.connections.connected_count(),
        "dashboard closed"
    );
    Ok(())
}
