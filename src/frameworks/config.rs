use std::{env, path::PathBuf, time::Duration};

// Runtime constants (not gameplay tuning).

pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// Level file to load; the built-in level is used when unset.
pub fn level_path() -> Option<PathBuf> {
    env::var_os("LEVEL_PATH").map(PathBuf::from)
}

/// Input script to replay; the built-in demo script is used when unset.
pub fn input_script_path() -> Option<PathBuf> {
    env::var_os("INPUT_SCRIPT_PATH").map(PathBuf::from)
}

pub fn max_ticks() -> Option<u64> {
    env::var("MAX_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n: &u64| n > 0)
}

pub fn tick_rate_hz() -> u32 {
    env::var("TICK_RATE_HZ")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&hz: &u32| hz > 0)
        .unwrap_or(DEFAULT_TICK_RATE_HZ)
}

pub fn tick_interval() -> Duration {
    interval_for_rate(tick_rate_hz())
}

/// Rates too high to resolve in nanoseconds fall back to the default rate.
pub fn interval_for_rate(hz: u32) -> Duration {
    Duration::from_secs(1)
        .checked_div(hz)
        .filter(|interval| !interval.is_zero())
        .unwrap_or(Duration::from_secs(1) / DEFAULT_TICK_RATE_HZ)
}

/// Pace ticks against the wall clock (default) or run as fast as possible.
pub fn realtime() -> bool {
    env::var("REALTIME")
        .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
        .unwrap_or(true)
}
