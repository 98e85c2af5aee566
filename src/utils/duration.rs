use std::time::Duration;

/// Parses a synchronization interval.
///
/// Accepts a bare number of seconds (`"1"`, `"0.5"`), a number with a unit suffix
/// (`"250ms"`, `"2s"`, `"1m"`, `"1h"`) or number/unit words (`"1 minute 30 seconds"`).
/// Zero is allowed, negative values are not.
pub fn parse_interval(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Empty interval".to_string());
    }

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let mut total = Duration::ZERO;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        let split = token
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(token.len());
        let (number, mut unit) = token.split_at(split);
        if number.is_empty() {
            return Err(format!("Missing number in interval: {value}"));
        }
        if unit.is_empty() {
            if let Some(next) = tokens.get(i + 1) {
                if next.chars().all(|c| c.is_ascii_alphabetic()) {
                    unit = next;
                    i += 1;
                }
            }
        }

        let amount: f64 = number
            .parse()
            .map_err(|_| format!("Invalid number: {number}"))?;
        let seconds = to_seconds(amount, unit).ok_or_else(|| format!("Unknown unit: {unit}"))?;
        total = total
            .checked_add(interval_from_seconds(seconds)?)
            .ok_or_else(|| format!("Interval too large: {value}"))?;
        i += 1;
    }

    Ok(total)
}

/// Converts a seconds value coming from a config file into a duration.
pub fn interval_from_seconds(seconds: f64) -> Result<Duration, String> {
    if seconds.is_sign_negative() && seconds != 0.0 {
        return Err(format!("Interval must not be negative: {seconds}"));
    }
    Duration::try_from_secs_f64(seconds).map_err(|err| format!("Invalid interval {seconds}: {err}"))
}

fn to_seconds(amount: f64, unit: &str) -> Option<f64> {
    let seconds = match unit.to_ascii_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => amount,
        "ms" | "millisecond" | "milliseconds" => amount / 1000.0,
        "m" | "min" | "mins" | "minute" | "minutes" => amount * 60.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => amount * 3600.0,
        _ => return None,
    };
    Some(seconds)
}
