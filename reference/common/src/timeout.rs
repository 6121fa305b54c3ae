//! Request timeout values from user input.

use std::time::Duration;

/// Parse a timeout given in seconds.
///
/// Zero, negative, NaN and values too large for a `Duration` yield `None`.
pub fn parse_timeout(secs: &str) -> Option<Duration> {
    let secs = secs.trim().parse::<f64>().ok()?;
    if secs <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}
