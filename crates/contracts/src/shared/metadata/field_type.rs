//! Field widget kinds for the entity schema

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Phone,
    Multiline,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Multiline => "multiline",
        }
    }

    /// Format check applied after the length rules
    pub fn check(&self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return true;
        }
        match self {
            Self::Email => match value.split_once('@') {
                Some((local, domain)) => {
                    !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
                }
                None => false,
            },
            Self::Phone => value
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')')),
            Self::Text | Self::Multiline => true,
        }
    }

    pub fn format_error(&self) -> &'static str {
        match self {
            Self::Email => "must be a valid email address",
            Self::Phone => "may only contain digits, spaces and + - ( )",
            Self::Text | Self::Multiline => "has an invalid format",
        }
    }
}
