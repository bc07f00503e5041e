pub const SECOND_MS: i64 = 1000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Inserts thousands separators into an integer: 1234567 -> "1,234,567".
pub fn with_commas(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a millisecond duration using the largest unit the value reaches:
/// days, hrs and min to one decimal, seconds to two. Values at or below one
/// second stay raw milliseconds with thousands separators. Negative values are
/// the no-data sentinel and render as a dash with no unit.
///
/// # Returns
/// The value text and the unit suffix, kept separate so renderers can style
/// the unit differently.
pub fn format_duration_ms(ms: i64) -> (String, Option<&'static str>) {
    if ms < 0 {
        return ("-".to_string(), None);
    }
    if ms >= DAY_MS {
        (format!("{:.1}", ms as f64 / DAY_MS as f64), Some("days"))
    } else if ms >= HOUR_MS {
        (format!("{:.1}", ms as f64 / HOUR_MS as f64), Some("hrs"))
    } else if ms >= MINUTE_MS {
        (format!("{:.1}", ms as f64 / MINUTE_MS as f64), Some("min"))
    } else if ms > SECOND_MS {
        (format!("{:.2}", ms as f64 / SECOND_MS as f64), Some("s"))
    } else {
        (with_commas(ms), Some("ms"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration_label(ms: i64) -> String {
        let (value, unit) = format_duration_ms(ms);
        format!("{}{}", value, unit.unwrap_or(""))
    }

    #[test]
    fn commas_group_by_three() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(1000), "1,000");
        assert_eq!(with_commas(1234567), "1,234,567");
        assert_eq!(with_commas(-4500), "-4,500");
    }

    #[test]
    fn durations_pick_largest_unit() {
        assert_eq!(duration_label(90_000), "1.5min");
        assert_eq!(duration_label(3_600_000), "1.0hrs");
        assert_eq!(duration_label(2 * DAY_MS), "2.0days");
        assert_eq!(duration_label(1500), "1.50s");
    }

    #[test]
    fn at_or_below_one_second_stays_milliseconds() {
        assert_eq!(duration_label(500), "500ms");
        assert_eq!(duration_label(1000), "1,000ms");
        assert_eq!(duration_label(0), "0ms");
    }

    #[test]
    fn negative_is_no_data_dash() {
        assert_eq!(format_duration_ms(-1), ("-".to_string(), None));
    }
}
