//! Clock Task
//!
//! Background task that publishes the current local time on every tick.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Format used when displaying the current time.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spawns a background task that refreshes the current time every `interval`.
///
/// The returned receiver starts with the time at spawn and is updated after
/// each tick. The task ends on its own once every receiver is dropped, or can
/// be aborted through the returned JoinHandle.
///
/// # Example
/// ```ignore
/// let (time, clock_handle) = spawn_clock_task(Duration::from_secs(60));
/// println!("{}", time.borrow().format(TIME_FORMAT));
/// // Later, during shutdown:
/// clock_handle.abort();
/// ```
pub fn spawn_clock_task(interval: Duration) -> (watch::Receiver<DateTime<Local>>, JoinHandle<()>) {
    let (sender, receiver) = watch::channel(Local::now());

    let handle = tokio::spawn(async move {
        info!("Starting clock task with a tick every {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let now = Local::now();
            if sender.send(now).is_err() {
                debug!("Clock task stopping: no receivers left");
                break;
            }
            info!("The current time is: {}", now.format(TIME_FORMAT));
        }
    });

    (receiver, handle)
}
