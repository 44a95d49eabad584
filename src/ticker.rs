use std::time::Duration;

/// How long the event loop waits for a key press before redrawing. Timer
/// events arrive over a channel, so this also bounds how stale the clock
/// display can get.
pub const POLL_INTERVAL_MS: u64 = 250;

pub fn poll_interval() -> Duration {
    Duration::from_millis(POLL_INTERVAL_MS)
}
