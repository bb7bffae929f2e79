//! Core domain modules for PopDash.
//!
//! Contains the population data model, the cached CSV loader, selection
//! filtering, descriptive statistics, map aggregation and the derived
//! dashboard view. Nothing in here depends on egui.

pub mod country_record;
pub mod geo_registry;
pub mod loader;
pub mod map;
pub mod selection;
pub mod stats;
pub mod table;
pub mod view;
