use serde::{Deserialize, Serialize};

/// `{value, label}` entry of the categories / weight option lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

impl LookupOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Label for a stored value, or the value itself when it is not in the list
pub fn label_for<'a>(options: &'a [LookupOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|opt| opt.value == value)
        .map(|opt| opt.label.as_str())
        .unwrap_or(value)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<LookupOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightOptionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub weight_options: Vec<LookupOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWeightUnitsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub custom_weight_units: Vec<LookupOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_falls_back_to_value() {
        let options = vec![LookupOption::new("250gm", "250 g")];
        assert_eq!(label_for(&options, "250gm"), "250 g");
        assert_eq!(label_for(&options, "1kg"), "1kg");
    }

    #[test]
    fn test_weight_options_wire_name() {
        let res: WeightOptionsResponse = serde_json::from_str(
            r#"{"success":true,"weightOptions":[{"value":"1kg","label":"1 kg"}]}"#,
        )
        .unwrap();
        assert!(res.success);
        assert_eq!(res.weight_options[0].label, "1 kg");
    }
}
