//! Application state controller implementation
//!
//! This module implements the controller that owns persisted counters and
//! settings, sequences the simulated clear operation, and publishes
//! immutable snapshots to subscribers.

use crate::error::Result;
use crate::platform::NotificationCapability;
use crate::settings::{SettingKey, Settings};
use crate::store::{KEY_COUNT, KEY_SETTINGS, KEY_TIMESTAMP, KeyValueStore};
use crate::utils::time::now_millis;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Fixed delay pacing the clearing animation
///
/// Purely UX pacing; the delay is a non-blocking suspension and is not
/// cancellable once started.
pub const CLEARING_DELAY: Duration = Duration::from_millis(1500);

/// Immutable view of controller state published to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// How many times badges have been cleared
    pub badges_cleared_count: u32,
    /// Epoch milliseconds of the most recent clear, absent before the first
    pub last_cleared_at: Option<i64>,
    /// Whether a clear operation is currently in flight
    pub is_clearing: bool,
    /// Current user settings
    pub settings: Settings,
}

/// Persisted fields, guarded by one mutex
#[derive(Debug)]
struct PersistedState {
    count: u32,
    last_cleared_at: Option<i64>,
    settings: Settings,
}

/// Application state controller
///
/// Owns the persisted counters/settings and mediates all reads/writes to
/// durable storage (`S`) and to the platform notification capability (`N`).
/// The UI layer holds no independent copy of the state, only snapshot
/// receivers from [`AppController::subscribe`].
pub struct AppController<S, N> {
    /// Durable key-value store
    store: S,
    /// Platform notification capability (no-op where unavailable)
    notifications: N,
    /// Persisted fields
    state: Mutex<PersistedState>,
    /// Transient clearing flag; true only while a clear is in flight
    is_clearing: AtomicBool,
    /// Set once by `initialize`; later calls are no-ops
    initialized: AtomicBool,
    /// Serializes settings blob writes so a stale blob never clobbers a
    /// newer one
    settings_write_lock: tokio::sync::Mutex<()>,
    /// Snapshot publisher
    snapshot_tx: watch::Sender<Snapshot>,
}

impl<S, N> AppController<S, N> {
    /// Subscribe to published snapshots
    ///
    /// The receiver starts at the current snapshot and observes every
    /// subsequent publication.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The most recently published snapshot
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Build a snapshot from current state and publish it
    fn publish(&self) {
        let snapshot = {
            let state = self.state.lock();
            Snapshot {
                badges_cleared_count: state.count,
                last_cleared_at: state.last_cleared_at,
                is_clearing: self.is_clearing.load(Ordering::SeqCst),
                settings: state.settings.clone(),
            }
        };
        self.snapshot_tx.send_replace(snapshot);
    }
}

/// Clears the in-flight flag and publishes on every exit path of
/// `clear_notifications`, including early returns and write failures.
struct ClearingGuard<'a, S, N> {
    controller: &'a AppController<S, N>,
}

impl<S, N> Drop for ClearingGuard<'_, S, N> {
    fn drop(&mut self) {
        self.controller.is_clearing.store(false, Ordering::SeqCst);
        self.controller.publish();
    }
}

impl<S, N> AppController<S, N>
where
    S: KeyValueStore,
    N: NotificationCapability,
{
    /// Create a controller with default state
    ///
    /// Call [`AppController::initialize`] once afterwards to load persisted
    /// state; subscribers attached in between observe the defaults.
    pub fn new(store: S, notifications: N) -> Self {
        let initial = Snapshot {
            badges_cleared_count: 0,
            last_cleared_at: None,
            is_clearing: false,
            settings: Settings::default(),
        };
        let (snapshot_tx, _) = watch::channel(initial);

        Self {
            store,
            notifications,
            state: Mutex::new(PersistedState {
                count: 0,
                last_cleared_at: None,
                settings: Settings::default(),
            }),
            is_clearing: AtomicBool::new(false),
            initialized: AtomicBool::new(false),
            settings_write_lock: tokio::sync::Mutex::new(()),
            snapshot_tx,
        }
    }

    /// Load persisted state and publish the initial snapshot
    ///
    /// Reads the three storage keys in one batch. Each key falls back to
    /// its default independently when missing or unparsable; a failed batch
    /// read falls back to all defaults. Neither is fatal.
    ///
    /// If `clear_on_launch` is enabled after loading, one automatic
    /// [`AppController::clear_notifications`] runs before this returns.
    /// Repeated `initialize` calls are ignored.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("initialize() called more than once; call ignored");
            return;
        }

        match self
            .store
            .multi_get(&[KEY_COUNT, KEY_TIMESTAMP, KEY_SETTINGS])
            .await
        {
            Ok(values) => {
                let mut values = values.into_iter();
                let count_raw = values.next().flatten();
                let timestamp_raw = values.next().flatten();
                let settings_raw = values.next().flatten();

                let mut state = self.state.lock();

                if let Some(raw) = count_raw {
                    match raw.parse::<u32>() {
                        Ok(count) => state.count = count,
                        Err(e) => warn!("Ignoring unparsable saved count {:?}: {}", raw, e),
                    }
                }

                if let Some(raw) = timestamp_raw {
                    match raw.parse::<i64>() {
                        Ok(timestamp) => state.last_cleared_at = Some(timestamp),
                        Err(e) => warn!("Ignoring unparsable saved timestamp {:?}: {}", raw, e),
                    }
                }

                if let Some(raw) = settings_raw {
                    // Per-field serde defaults merge a partial blob over the
                    // default settings rather than replacing them.
                    match serde_json::from_str::<Settings>(&raw) {
                        Ok(settings) => state.settings = settings,
                        Err(e) => {
                            warn!("Ignoring unparsable saved settings, using defaults: {}", e);
                        }
                    }
                }

                drop(state);
                info!("Saved data loaded");
            }
            Err(e) => {
                error!("Failed to load saved data, using defaults: {}", e);
            }
        }

        self.publish();

        let clear_on_launch = self.state.lock().settings.clear_on_launch;
        if clear_on_launch {
            info!("clearOnLaunch is enabled, clearing once at startup");
            self.clear_notifications().await;
        }
    }

    /// Replace one setting and persist the full settings blob
    ///
    /// The new value is published immediately; persistence happens after and
    /// is never rolled back on failure (the failure is logged). Blob writes
    /// are serialized and always capture the latest in-memory settings, so
    /// back-to-back updates cannot clobber each other with stale blobs.
    ///
    /// Flipping `clear_on_launch` from off to on triggers one automatic
    /// clear, mirroring the launch-time behavior.
    pub async fn update_setting(&self, key: SettingKey, value: bool) {
        let previous = {
            let mut state = self.state.lock();
            let previous = state.settings.get(key);
            state.settings.set(key, value);
            previous
        };
        self.publish();
        debug!("Setting {} updated: {} -> {}", key, previous, value);

        {
            let _write_guard = self.settings_write_lock.lock().await;
            let settings = self.state.lock().settings.clone();
            let result = match serde_json::to_string(&settings) {
                Ok(json) => self.store.multi_set(&[(KEY_SETTINGS, json.as_str())]).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                // Optimistic update: the in-memory value stays.
                error!("Failed to save settings: {}", e);
            }
        }

        if key == SettingKey::ClearOnLaunch && value && !previous {
            info!("clearOnLaunch enabled, clearing once");
            self.clear_notifications().await;
        }
    }

    /// Run the simulated clear operation
    ///
    /// A no-op if a clear is already in flight. Otherwise publishes the
    /// clearing flag, waits the fixed animation delay, asks the platform to
    /// zero the badge and dismiss notifications (failures are warnings),
    /// then durably writes the incremented count and fresh timestamp in one
    /// batch. In-memory state follows only a successful write; the clearing
    /// flag is cleared and published on every exit path.
    pub async fn clear_notifications(&self) {
        if self.is_clearing.swap(true, Ordering::SeqCst) {
            debug!("Clear already in flight; call ignored");
            return;
        }
        let _clearing = ClearingGuard { controller: self };
        self.publish();

        tokio::time::sleep(CLEARING_DELAY).await;

        if let Err(e) = self.notifications.set_badge_count(0).await {
            warn!("Badge clearing unavailable: {}", e);
        }
        if let Err(e) = self.notifications.dismiss_all_notifications().await {
            warn!("Dismissing notifications unavailable: {}", e);
        }

        let new_count = self.state.lock().count.saturating_add(1);
        let now = now_millis();

        let count_value = new_count.to_string();
        let timestamp_value = now.to_string();
        match self
            .store
            .multi_set(&[
                (KEY_COUNT, count_value.as_str()),
                (KEY_TIMESTAMP, timestamp_value.as_str()),
            ])
            .await
        {
            Ok(()) => {
                let mut state = self.state.lock();
                state.count = new_count;
                state.last_cleared_at = Some(now);
                drop(state);
                self.publish();
                info!("Badges cleared ({} total)", new_count);
            }
            Err(e) => {
                // The increment is only observable when the durable write
                // succeeded; in-memory state stays consistent with storage.
                error!("Failed to save clear history: {}", e);
            }
        }
    }

    /// Remove the persisted clear history and reset the in-memory counters
    ///
    /// Unlike the other operations, a storage failure here is propagated to
    /// the caller so the UI can show an error notice. In-memory state is
    /// untouched on failure.
    pub async fn clear_history(&self) -> Result<()> {
        if let Err(e) = self.store.multi_remove(&[KEY_COUNT, KEY_TIMESTAMP]).await {
            error!("Failed to clear history: {}", e);
            return Err(e);
        }

        let mut state = self.state.lock();
        state.count = 0;
        state.last_cleared_at = None;
        drop(state);
        self.publish();
        info!("Clear history reset");
        Ok(())
    }
}
