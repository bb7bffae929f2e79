//! UI sub-modules for PopDash.
//!
//! Panels that need app state add rendering methods to
//! [`crate::app::PopDashApp`] via `impl` blocks; the chart and table
//! modules are free functions over the prebuilt view.

pub mod charts;
pub mod dashboard;
pub mod raw_table;
pub mod sidebar;
pub mod stats_panel;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
