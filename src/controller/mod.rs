//! Application state controller module
//!
//! This module implements the single source of truth for settings and
//! clear-history, the sequencing of the simulated clear operation, and all
//! persistence.
//!
//! # Overview
//!
//! The controller:
//! - **Loads persisted state** once at startup (count, timestamp, settings)
//! - **Sequences the clear operation** behind a re-entrancy guard
//! - **Persists every mutation** through the batched key-value store
//! - **Publishes snapshots** to subscribers whenever state changes
//!
//! # Architecture
//!
//! - `AppController`: owns the persisted fields and the transient clearing flag
//! - `Snapshot`: immutable view published to the UI layer
//! - **Capability seams**: storage and the platform notification API are
//!   trait parameters, so tests and storage-less platforms plug in freely
//!
//! # Data Flow
//!
//! ```text
//! UI action → AppController method → platform API → durable store write
//!                                          ↓
//!                                      Snapshot → subscribers
//! ```
//!
//! # Clear Operation
//!
//! 1. Re-entrancy check: a clear already in flight makes the call a no-op
//! 2. Publish the clearing flag (drives the UI "Clearing…" state)
//! 3. Non-blocking 1500 ms delay pacing the clearing animation
//! 4. Zero the platform badge and dismiss notifications (failures are
//!    warnings, the flow continues)
//! 5. Batched durable write of the incremented count and fresh timestamp;
//!    in-memory state only follows a successful write
//! 6. Clearing flag cleared and published on every exit path

pub mod app_controller;

pub use app_controller::{AppController, CLEARING_DELAY, Snapshot};
