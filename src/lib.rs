//! Badge Buster - app-state controller for the badge clearing demo
//!
//! Owns the persisted clear-history and settings, sequences the simulated
//! clear operation behind a re-entrancy guard, and publishes immutable
//! snapshots over a watch channel for any front end to consume. Durable
//! storage and the platform notification/haptic APIs sit behind traits
//! with no-op implementations for platforms that lack them.
//!
//! # Non-goals
//!
//! Clearing badges belonging to other applications is not implemented and
//! cannot be: platform sandboxing restricts badge control to the app's own
//! icon.

// Module declarations
pub mod controller;
pub mod error;
pub mod platform;
pub mod settings;
pub mod store;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use controller::{AppController, Snapshot};
pub use error::{BadgeBusterError, Result};
pub use settings::{SettingKey, Settings};
