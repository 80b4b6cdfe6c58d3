//! Platform capabilities
//!
//! The notification and haptic APIs exist on some platforms and not others.
//! Each capability is a trait with a no-op implementation selected where the
//! platform offers nothing, so callers never branch on platform identity:
//! the controller always asks for the badge to be zeroed, and on a platform
//! without a badge API that request simply succeeds without effect.

pub mod noop;

pub use noop::{NoopHaptics, NoopNotifications};

use crate::error::Result;
use std::future::Future;

/// Platform notification capability
///
/// Both operations may fail at runtime (permissions, sandboxing); the
/// controller treats failures as warnings and continues.
pub trait NotificationCapability: Send + Sync {
    /// Set the application badge count
    fn set_badge_count(&self, count: u32) -> impl Future<Output = Result<()>> + Send;

    /// Dismiss all delivered notifications
    fn dismiss_all_notifications(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Haptic feedback capability
///
/// A single fire-and-forget "medium impact" pulse. The UI layer invokes it
/// only when the `haptic_feedback` setting is enabled.
pub trait HapticCapability: Send + Sync {
    /// Fire one medium-impact pulse
    fn impact_medium(&self);
}
