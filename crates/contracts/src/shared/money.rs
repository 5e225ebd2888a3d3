//! Currency helpers for the GBP amounts that flow through the fleet data.
//!
//! Source records carry costs as display strings (`"GBP 1,070.03"`); charts
//! need plain `f64`s and cards need them formatted back.

/// Parse a currency-formatted string into a number.
///
/// Every character other than digits, `.` and `-` is dropped before parsing,
/// so `"GBP 1,070.03"`, `"£1,070.03"` and `"1070.03"` all yield `1070.03`.
/// Unparseable input yields `0.0`.
pub fn parse_money(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Round to two decimal places (pennies).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average monthly spend for an annual total; zero totals stay zero.
pub fn monthly_average(annual_total: f64) -> f64 {
    if annual_total > 0.0 {
        round2(annual_total / 12.0)
    } else {
        0.0
    }
}

/// Insert `,` between thousands groups of an integer string: `"1234567"`
/// becomes `"1,234,567"`.
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format as pounds with pennies: `1234.5` → `"£1,234.50"`.
pub fn format_gbp(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}£{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Format as whole pounds: `1234.5` → `"£1,235"`.
pub fn format_gbp_whole(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}£{}", sign, group_thousands(&digits))
}

/// Compact axis label: `12500.0` → `"£13k"`. Halves round away from zero.
pub fn format_gbp_thousands(value: f64) -> String {
    let thousands = (value / 1000.0).round();
    // keep "-0" out of the label
    format!("£{:.0}k", if thousands == 0.0 { 0.0 } else { thousands })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_cost_strings() {
        assert_eq!(parse_money("GBP 1,070.03"), 1070.03);
        assert_eq!(parse_money("GBP 0.00"), 0.0);
        assert_eq!(parse_money("£2,762.16"), 2762.16);
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("n/a"), 0.0);
    }

    #[test]
    fn formats_pounds() {
        assert_eq!(format_gbp(1234.5), "£1,234.50");
        assert_eq!(format_gbp(0.0), "£0.00");
        assert_eq!(format_gbp(1_234_567.891), "£1,234,567.89");
        assert_eq!(format_gbp(-42.0), "-£42.00");
        assert_eq!(format_gbp_whole(1234.5), "£1,235");
        assert_eq!(format_gbp_whole(999.0), "£999");
    }

    #[test]
    fn thousands_labels_round_halves_up() {
        assert_eq!(format_gbp_thousands(12_500.0), "£13k");
        assert_eq!(format_gbp_thousands(11_500.0), "£12k");
        assert_eq!(format_gbp_thousands(12_499.0), "£12k");
        assert_eq!(format_gbp_thousands(-200.0), "£0k");
    }

    #[test]
    fn groups_digit_strings() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn monthly_average_of_zero_is_zero() {
        assert_eq!(monthly_average(0.0), 0.0);
        assert_eq!(monthly_average(1200.0), 100.0);
        assert_eq!(monthly_average(1000.0), 83.33);
    }
}
