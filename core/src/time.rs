use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the number of milliseconds since UNIX EPOCH
#[inline]
pub fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or_default()
}

/// Returns the number of seconds since UNIX EPOCH
#[inline]
pub fn unix_now_secs() -> u64 {
    unix_now() / 1000
}
