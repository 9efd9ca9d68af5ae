use std::{env, path::PathBuf, time::Duration};

// Runtime constants and environment settings (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const FRAME_BROADCAST_CAPACITY: usize = 128;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);
pub const DEFAULT_MAX_FRAMES: u64 = 3600;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `LOG_FORMAT=json` switches to structured JSON logs.
pub fn json_logs() -> bool {
    is_json_format(env::var("LOG_FORMAT").ok().as_deref())
}

fn is_json_format(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}

/// Directory of `*.json` level files; built-in levels when unset.
pub fn levels_dir() -> Option<PathBuf> {
    env::var_os("LEVELS_DIR").map(PathBuf::from)
}

/// Input script replayed by the headless runner; idle input when unset.
pub fn input_script() -> Option<PathBuf> {
    env::var_os("INPUT_SCRIPT").map(PathBuf::from)
}

pub fn max_frames() -> u64 {
    env::var("MAX_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES)
}

pub fn god_mode() -> bool {
    env::var("GOD_MODE")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

pub fn tick_interval() -> Duration {
    env::var("TICK_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
        .unwrap_or(TICK_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_log_format_is_json_in_any_case_then_json_logs_are_selected() {
        assert!(is_json_format(Some("json")));
        assert!(is_json_format(Some(" JSON ")));
        assert!(!is_json_format(Some("compact")));
        assert!(!is_json_format(None));
    }

    #[test]
    fn when_default_log_filter_is_parsed_then_it_is_accepted() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
