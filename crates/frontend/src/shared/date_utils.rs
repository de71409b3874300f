/// Date formatting for timestamps coming from the API
///
/// The API sends RFC 3339 strings; anything unparsable is shown as-is.
use chrono::{DateTime, FixedOffset};

fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
pub fn format_date(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Optional timestamp, "Never" when missing
pub fn format_last_active(raw: Option<&str>) -> String {
    match raw {
        Some(raw) if !raw.trim().is_empty() => format_datetime(raw),
        _ => "Never".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31 Dec 2024, 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_last_active(None), "Never");
        assert_eq!(format_last_active(Some("")), "Never");
    }
}
