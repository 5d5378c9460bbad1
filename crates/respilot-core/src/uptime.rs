//! Process uptime tracking and human-readable formatting.

use std::time::{Duration, Instant};

/// Records the process start instant; elapsed time is computed on demand.
#[derive(Debug, Clone)]
pub struct UptimeTracker {
    start: Instant,
}

impl UptimeTracker {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Wall-clock time since process start. Non-negative and monotonically
    /// non-decreasing across calls.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for UptimeTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an uptime using the largest applicable leading unit.
///
/// Renders exactly one of `"{d}d {h}h {m}m {s}s"`, `"{h}h {m}m {s}s"`,
/// `"{m}m {s}s"`, `"{s}s"` — the first pattern whose leading unit is
/// nonzero, falling through to seconds-only at zero. Sub-unit components
/// inside the chosen pattern are always rendered even when zero.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
