//! Number formatting helpers

/// Integer with `,` as the thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Quantity cell: grouped digits, or `N/A` when absent
pub fn format_quantity(value: Option<u64>) -> String {
    match value {
        Some(v) => format_thousands(v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(0), "0");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(Some(1234567)), "1,234,567");
        assert_eq!(format_quantity(None), "N/A");
    }
}
