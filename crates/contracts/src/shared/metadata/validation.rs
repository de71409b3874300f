//! Validation rules for schema fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value; lengths count characters of the trimmed value
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if self.required && value.is_empty() {
            return Err(format!("{} is required", field_label));
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len > 0 && len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} too long (max {} characters)", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("  ", "Email"),
            Err("Email is required".to_string())
        );
        assert!(ValidationRules::none().validate_string("", "Email").is_ok());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules::required().with_max_length(3);
        assert!(rules.validate_string("ळळळ", "Name").is_ok());
        assert_eq!(
            rules.validate_string("abcd", "Name"),
            Err("Name too long (max 3 characters)".to_string())
        );
    }
}
