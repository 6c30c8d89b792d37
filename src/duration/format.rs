use std::time::Duration;

/// Short human-readable form of an elapsed value, e.g. `1d 2h 30m`.
///
/// Leading zero units are omitted; seconds only show when non-zero or when
/// the value is shorter than a minute.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs % 3_600) / 60;
    let rem = secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if secs >= 60 {
        parts.push(format!("{}m", mins));
    }
    if rem > 0 || secs < 60 {
        parts.push(format!("{}s", rem));
    }
    parts.join(" ")
}
