use std::time::Duration;

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input is not a number or is zero.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let value = s.trim().parse::<usize>().map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value == 0 {
        return Err("value must be at least 1".to_string());
    }
    Ok(value)
}

/// Parse a watch interval: bare seconds (`2`, `0.5`) or with an `ms`/`s` suffix.
///
/// # Errors
/// Returns an error for malformed, negative or zero durations.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_ascii_lowercase();
    let (number, millis) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, true)
    } else {
        (s.strip_suffix('s').unwrap_or(&s), false)
    };

    let value: f64 = number.trim().parse().map_err(|_| format!("invalid interval: {s}"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("interval must be positive: {s}"));
    }

    let secs = if millis { value / 1000.0 } else { value };
    Duration::try_from_secs_f64(secs).map_err(|err| format!("invalid interval '{s}': {err}"))
}
