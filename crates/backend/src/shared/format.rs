use contracts::shared::money::group_thousands;

/// Formats a count with `,` thousands separators: `1234567` becomes
/// `1,234,567`.
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Human-readable response size for the request log: `512 B`, `12.4 KB`.
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", format_number(bytes))
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }
}
