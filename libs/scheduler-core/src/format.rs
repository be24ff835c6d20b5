//! Human-readable interval strings.

const HOUR: f64 = 1.0 / 24.0;

/// Format an interval in days as a short label: `10m`, `3h`, `6d`, `2mo`, `1.5y`.
///
/// Thresholds are half-open: exactly 30 days is `1mo`, exactly 365 days is
/// `1y`. Negative or non-finite input is treated as zero.
pub fn format_interval(days: f64) -> String {
    let days = if days.is_finite() { days.max(0.0) } else { 0.0 };

    if days < HOUR {
        format!("{}m", (days * 1440.0).round() as i64)
    } else if days < 1.0 {
        format!("{}h", (days * 24.0).round() as i64)
    } else if days < 30.0 {
        format!("{}d", days.round() as i64)
    } else if days < 365.0 {
        format!("{}mo", (days / 30.0).round() as i64)
    } else {
        let years = (days / 365.0 * 10.0).round() / 10.0;
        format!("{years}y")
    }
}
