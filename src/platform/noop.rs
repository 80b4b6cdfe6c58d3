//! No-op capability implementations
//!
//! Selected where the current platform exposes no badge or haptic API
//! (desktop terminals, web-like sandboxes). Every operation succeeds
//! without effect, which keeps the controller's clear flow identical
//! across platforms.

use crate::error::Result;
use crate::platform::{HapticCapability, NotificationCapability};
use tracing::debug;

/// Notification capability for platforms without a badge API
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifications;

impl NotificationCapability for NoopNotifications {
    async fn set_badge_count(&self, count: u32) -> Result<()> {
        debug!("No notification API on this platform; badge count {} not applied", count);
        Ok(())
    }

    async fn dismiss_all_notifications(&self) -> Result<()> {
        debug!("No notification API on this platform; nothing to dismiss");
        Ok(())
    }
}

/// Haptic capability for platforms without a vibration motor
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl HapticCapability for NoopHaptics {
    fn impact_medium(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_notifications_always_succeed() {
        let notifications = NoopNotifications;
        assert!(notifications.set_badge_count(0).await.is_ok());
        assert!(notifications.dismiss_all_notifications().await.is_ok());
    }
}
