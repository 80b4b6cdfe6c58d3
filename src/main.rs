//! Badge Buster demo front end
//!
//! Interactive terminal loop over the app-state controller: shows the
//! current snapshot, runs the simulated clear, toggles settings, and
//! resets the clear history (with confirmation when enabled).

use anyhow::{Context, Result};
use badgebuster::controller::AppController;
use badgebuster::error::get_user_friendly_error;
use badgebuster::platform::{HapticCapability, NoopHaptics, NoopNotifications, NotificationCapability};
use badgebuster::settings::SettingKey;
use badgebuster::store::{FileStore, KeyValueStore};
use badgebuster::theme::Theme;
use badgebuster::utils;
use badgebuster::utils::time::{format_clear_count, format_last_cleared};
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("Badge Buster demo starting");

    let store = FileStore::new(FileStore::default_path());
    info!("Using storage file {}", store.path().display());

    // Terminals expose neither a badge nor a haptic API; the no-op
    // capabilities keep the controller flow identical to a mobile build.
    let controller = AppController::new(store, NoopNotifications);
    let haptics = NoopHaptics;

    controller.initialize().await;

    println!("Badge Buster");
    println!("A UI concept for clearing red-dot badges");
    println!();
    print_status(&controller);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("clear") => run_clear(&controller, &haptics).await,
            Some("reset") => run_reset(&controller, &mut lines).await?,
            Some("set") => run_set(&controller, parts.next(), parts.next()).await,
            Some("status") => print_status(&controller),
            Some("help") => print_help(),
            Some("quit" | "exit") => break,
            Some(other) => println!("Unknown command: {other} (try \"help\")"),
            None => {}
        }
    }

    info!("Badge Buster demo exiting");
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

/// Run the simulated clear and pulse haptics on success when enabled
async fn run_clear<S, N>(controller: &AppController<S, N>, haptics: &impl HapticCapability)
where
    S: KeyValueStore,
    N: NotificationCapability,
{
    let before = controller.snapshot().badges_cleared_count;
    println!("Clearing...");
    controller.clear_notifications().await;

    let snapshot = controller.snapshot();
    if snapshot.badges_cleared_count > before {
        if snapshot.settings.haptic_feedback {
            haptics.impact_medium();
        }
        println!("Badges cleared.");
    } else {
        println!("Clearing finished, but the result could not be saved.");
    }
    print_status(controller);
}

/// Reset the clear history, asking first when confirmation is enabled
async fn run_reset<S, N>(
    controller: &AppController<S, N>,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<()>
where
    S: KeyValueStore,
    N: NotificationCapability,
{
    if controller.snapshot().settings.show_confirmation {
        println!(
            "This will reset your notification clearing count and timestamp. Continue? [y/N]"
        );
        prompt()?;
        let answer = lines.next_line().await?.unwrap_or_default();
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match controller.clear_history().await {
        Ok(()) => {
            println!("History cleared.");
            print_status(controller);
        }
        Err(e) => println!("{}", get_user_friendly_error(&e)),
    }
    Ok(())
}

/// Toggle one setting: `set <key> <on|off>`
async fn run_set<S, N>(controller: &AppController<S, N>, key: Option<&str>, value: Option<&str>)
where
    S: KeyValueStore,
    N: NotificationCapability,
{
    let (Some(key), Some(value)) = (key, value) else {
        println!("Usage: set <key> <on|off>");
        print_setting_keys();
        return;
    };

    let key = match key.parse::<SettingKey>() {
        Ok(key) => key,
        Err(e) => {
            println!("{e}");
            print_setting_keys();
            return;
        }
    };
    let value = match value {
        "on" | "true" => true,
        "off" | "false" => false,
        other => {
            println!("Expected \"on\" or \"off\", got {other:?}");
            return;
        }
    };

    controller.update_setting(key, value).await;
    print_status(controller);
}

fn print_status<S, N>(controller: &AppController<S, N>) {
    let snapshot = controller.snapshot();
    let theme = Theme::for_settings(&snapshot.settings);
    let palette = if snapshot.settings.dark_mode {
        "dark"
    } else {
        "light"
    };

    println!(
        "Theme: {palette} (accent {})  |  Last cleared: {}",
        theme.accent,
        format_last_cleared(snapshot.last_cleared_at)
    );
    if snapshot.badges_cleared_count > 0 {
        println!(
            "You've cleared your notifications {}",
            format_clear_count(snapshot.badges_cleared_count)
        );
    }
    println!(
        "Settings: darkMode={} hapticFeedback={} clearOnLaunch={} showConfirmation={}",
        on_off(snapshot.settings.dark_mode),
        on_off(snapshot.settings.haptic_feedback),
        on_off(snapshot.settings.clear_on_launch),
        on_off(snapshot.settings.show_confirmation),
    );
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  clear            Clear badges (simulated)");
    println!("  reset            Reset the clear history");
    println!("  set <key> <on|off>  Change a setting");
    println!("  status           Show the current state");
    println!("  help             Show this help");
    println!("  quit             Exit");
    println!();
}

fn print_setting_keys() {
    println!("Keys: darkMode, hapticFeedback, clearOnLaunch, showConfirmation");
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
