//! Dashboard controller and configuration for bikedash

pub mod controller;
pub mod narrative;
pub mod settings;

pub use controller::{ControllerState, DashboardController, DashboardSlot, LoadedTables};
pub use settings::DashboardSettings;
