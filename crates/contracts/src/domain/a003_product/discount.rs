use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format of an `<input type="datetime-local">` value
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    None,
    Percentage,
    Fixed,
}

impl DiscountType {
    pub const ALL: [DiscountType; 3] = [Self::None, Self::Percentage, Self::Fixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No discount",
            Self::Percentage => "Percentage (%)",
            Self::Fixed => "Fixed amount",
        }
    }

    /// Unknown or empty values mean no discount
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "percentage" => Self::Percentage,
            "fixed" => Self::Fixed,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    #[error("Valid discount value is required when discount is enabled")]
    InvalidValue,
    #[error("Percentage discount cannot exceed 100%")]
    PercentageOver100,
    #[error("Fixed discount cannot be greater than or equal to product price")]
    FixedNotBelowPrice,
    #[error("Discount start date must be before end date")]
    StartNotBeforeEnd,
    #[error("Invalid discount date \"{0}\"")]
    InvalidDate(String),
}

/// Validated discount, dates normalized to the datetime-local format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_end_date: Option<String>,
}

impl Discount {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.discount_type != DiscountType::None
    }

    pub fn apply(&self, price: f64) -> f64 {
        discounted_price(price, self.discount_type, self.discount_value)
    }
}

/// Price after the discount; no clamping, callers validate first
pub fn discounted_price(price: f64, kind: DiscountType, value: f64) -> f64 {
    match kind {
        DiscountType::None => price,
        DiscountType::Percentage => price - price * value / 100.0,
        DiscountType::Fixed => price - value,
    }
}

/// Parse a datetime-local value; seconds and RFC 3339 strings are accepted too
pub fn parse_datetime_local(raw: &str) -> Result<Option<NaiveDateTime>, DiscountError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc()))
        .map(Some)
        .map_err(|_| DiscountError::InvalidDate(raw.to_string()))
}

/// Prefill value for a datetime-local input from a stored timestamp
pub fn to_datetime_local(stored: &str) -> String {
    match parse_datetime_local(stored) {
        Ok(Some(dt)) => dt.format(DATETIME_LOCAL_FORMAT).to_string(),
        _ => String::new(),
    }
}

/// Validate raw form input for a discount.
///
/// Nothing is checked when the type is `None`; the value and dates are
/// ignored in that case.
pub fn validate_discount(
    kind: DiscountType,
    raw_value: &str,
    price: f64,
    raw_start: &str,
    raw_end: &str,
) -> Result<Discount, DiscountError> {
    if kind == DiscountType::None {
        return Ok(Discount::none());
    }

    let value = raw_value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(DiscountError::InvalidValue)?;

    match kind {
        DiscountType::Percentage if value > 100.0 => return Err(DiscountError::PercentageOver100),
        DiscountType::Fixed if value >= price => return Err(DiscountError::FixedNotBelowPrice),
        _ => {}
    }

    let start = parse_datetime_local(raw_start)?;
    let end = parse_datetime_local(raw_end)?;
    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            return Err(DiscountError::StartNotBeforeEnd);
        }
    }

    Ok(Discount {
        discount_type: kind,
        discount_value: value,
        discount_start_date: start.map(|d| d.format(DATETIME_LOCAL_FORMAT).to_string()),
        discount_end_date: end.map(|d| d.format(DATETIME_LOCAL_FORMAT).to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        assert_eq!(discounted_price(200.0, DiscountType::Percentage, 10.0), 180.0);
        assert_eq!(discounted_price(200.0, DiscountType::Fixed, 25.0), 175.0);
        assert_eq!(discounted_price(200.0, DiscountType::None, 25.0), 200.0);
    }

    #[test]
    fn test_value_must_be_positive() {
        for raw in ["", "0", "-5", "abc"] {
            assert_eq!(
                validate_discount(DiscountType::Percentage, raw, 100.0, "", ""),
                Err(DiscountError::InvalidValue)
            );
        }
    }

    #[test]
    fn test_percentage_cap_and_fixed_below_price() {
        assert_eq!(
            validate_discount(DiscountType::Percentage, "101", 100.0, "", ""),
            Err(DiscountError::PercentageOver100)
        );
        assert!(validate_discount(DiscountType::Percentage, "100", 100.0, "", "").is_ok());
        assert_eq!(
            validate_discount(DiscountType::Fixed, "100", 100.0, "", ""),
            Err(DiscountError::FixedNotBelowPrice)
        );
        assert!(validate_discount(DiscountType::Fixed, "99.5", 100.0, "", "").is_ok());
    }

    #[test]
    fn test_start_before_end() {
        assert_eq!(
            validate_discount(
                DiscountType::Fixed,
                "10",
                100.0,
                "2024-05-02T10:00",
                "2024-05-01T10:00"
            ),
            Err(DiscountError::StartNotBeforeEnd)
        );
        let ok = validate_discount(
            DiscountType::Fixed,
            "10",
            100.0,
            "2024-05-01T10:00:00",
            "2024-05-02T10:00",
        )
        .unwrap();
        assert_eq!(ok.discount_start_date.as_deref(), Some("2024-05-01T10:00"));
        assert_eq!(ok.apply(100.0), 90.0);
    }

    #[test]
    fn test_none_ignores_value() {
        let d = validate_discount(DiscountType::None, "garbage", 1.0, "x", "y").unwrap();
        assert!(!d.is_active());
    }

    #[test]
    fn test_to_datetime_local() {
        assert_eq!(to_datetime_local("2024-05-01T10:30:00.000Z"), "2024-05-01T10:30");
        assert_eq!(to_datetime_local(""), "");
        assert_eq!(to_datetime_local("yesterday"), "");
    }
}
