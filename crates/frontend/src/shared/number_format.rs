//! Display formatting for counts and percentages.
//!
//! Money lives in `contracts::shared::money` because the API formats the
//! same amounts.

use contracts::shared::money::group_thousands;

/// `12500` -> `"12,500"`
pub fn format_thousands(n: i64) -> String {
    let grouped = group_thousands(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `42.345, 1` -> `"42.3%"`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals)
}

/// Percentage with an explicit sign, for deviations from an average.
pub fn format_signed_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{:.1}%", rounded)
    } else if rounded < 0.0 {
        format!("{:.1}%", rounded)
    } else {
        "0.0%".to_string()
    }
}

/// Share of `part` in `total` as a percentage; zero when `total` is zero.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12_500), "12,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-4_200), "-4,200");
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percent(42.345, 1), "42.3%");
        assert_eq!(format_percent(100.0, 0), "100%");
        assert_eq!(format_signed_percent(23.46), "+23.5%");
        assert_eq!(format_signed_percent(-8.0), "-8.0%");
        assert_eq!(format_signed_percent(0.01), "0.0%");
    }

    #[test]
    fn share_of_empty_total_is_zero() {
        assert_eq!(share_percent(5.0, 0.0), 0.0);
        assert_eq!(share_percent(1.0, 4.0), 25.0);
    }
}
