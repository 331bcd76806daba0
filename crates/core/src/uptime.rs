//! Human-readable uptime strings for the liveness endpoint.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Format a duration in seconds as `"{d}d {h}h {m}m {s}s"`.
///
/// Leading zero units are omitted: `42s`, `3m 5s`, `1h 0m 0s`, `2d 3h 4m 5s`.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / DAY;
    let hours = (total_secs % DAY) / HOUR;
    let minutes = (total_secs % HOUR) / MINUTE;
    let seconds = total_secs % MINUTE;

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
