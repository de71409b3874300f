use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lookup::LookupOption;

/// Closed product category vocabulary.
///
/// The canonical label is the lower-case string the backend stores. Both the
/// CSV importer and the catalog filters read the list from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductCategory {
    VegetablesFruits,
    AttaRiceDal,
    OilGhee,
    SpicesHerbs,
    DairyBreadEggs,
    BakeryBiscuits,
    DryFruitsCereals,
    ChickenMeatFish,
    BeveragesSoftDrinks,
    HouseholdCleaning,
    PersonalCare,
    BabyCareDiapers,
    PetCare,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 14] = [
        Self::VegetablesFruits,
        Self::AttaRiceDal,
        Self::OilGhee,
        Self::SpicesHerbs,
        Self::DairyBreadEggs,
        Self::BakeryBiscuits,
        Self::DryFruitsCereals,
        Self::ChickenMeatFish,
        Self::BeveragesSoftDrinks,
        Self::HouseholdCleaning,
        Self::PersonalCare,
        Self::BabyCareDiapers,
        Self::PetCare,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::VegetablesFruits => "vegetables & fruits",
            Self::AttaRiceDal => "atta, rice & dal",
            Self::OilGhee => "oil & ghee",
            Self::SpicesHerbs => "spices & herbs",
            Self::DairyBreadEggs => "dairy, bread & eggs",
            Self::BakeryBiscuits => "bakery & biscuits",
            Self::DryFruitsCereals => "dry fruits & cereals",
            // the stored label really has a space before the comma
            Self::ChickenMeatFish => "chicken , meat & fish",
            Self::BeveragesSoftDrinks => "beverages & soft drinks",
            Self::HouseholdCleaning => "household & cleaning",
            Self::PersonalCare => "personal care",
            Self::BabyCareDiapers => "baby care & diapers",
            Self::PetCare => "pet care",
            Self::Other => "other",
        }
    }

    /// Case-insensitive match against the canonical labels
    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.label() == needle)
    }

    /// Title-cased label for menus, e.g. "Oil & Ghee"
    pub fn display_name(&self) -> String {
        self.label()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category \"{}\"", s))
    }
}

impl Serialize for ProductCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProductCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Drift against the backend list
// ============================================================================

/// Differences between the local vocabulary and `/categories`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDrift {
    /// Local categories the backend did not return
    pub missing_remotely: Vec<ProductCategory>,
    /// Backend values with no local counterpart
    pub unknown_locally: Vec<String>,
}

impl CategoryDrift {
    pub fn is_empty(&self) -> bool {
        self.missing_remotely.is_empty() && self.unknown_locally.is_empty()
    }
}

pub fn category_drift(remote: &[LookupOption]) -> CategoryDrift {
    let unknown_locally = remote
        .iter()
        .filter(|opt| ProductCategory::parse(&opt.value).is_none())
        .map(|opt| opt.value.clone())
        .collect();

    let missing_remotely = ProductCategory::ALL
        .into_iter()
        .filter(|c| {
            !remote
                .iter()
                .any(|opt| ProductCategory::parse(&opt.value) == Some(*c))
        })
        .collect();

    CategoryDrift {
        missing_remotely,
        unknown_locally,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            ProductCategory::parse("Vegetables & Fruits"),
            Some(ProductCategory::VegetablesFruits)
        );
        assert_eq!(
            ProductCategory::parse("CHICKEN , MEAT & FISH"),
            Some(ProductCategory::ChickenMeatFish)
        );
        assert_eq!(ProductCategory::parse("chicken, meat & fish"), None);
        assert_eq!(ProductCategory::parse("toys"), None);
    }

    #[test]
    fn test_labels_are_unique_and_lowercase() {
        for (i, a) in ProductCategory::ALL.iter().enumerate() {
            assert_eq!(a.label(), a.label().to_lowercase());
            for b in &ProductCategory::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_serde_uses_canonical_label() {
        let json = serde_json::to_string(&ProductCategory::OilGhee).unwrap();
        assert_eq!(json, "\"oil & ghee\"");
        let back: ProductCategory = serde_json::from_str("\"Oil & Ghee\"").unwrap();
        assert_eq!(back, ProductCategory::OilGhee);
        assert!(serde_json::from_str::<ProductCategory>("\"toys\"").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ProductCategory::AttaRiceDal.display_name(), "Atta, Rice & Dal");
    }

    #[test]
    fn test_category_drift() {
        let mut remote: Vec<LookupOption> = ProductCategory::ALL
            .iter()
            .filter(|c| **c != ProductCategory::PetCare)
            .map(|c| LookupOption::new(c.label(), &c.display_name()))
            .collect();
        assert_eq!(
            category_drift(&remote).missing_remotely,
            vec![ProductCategory::PetCare]
        );

        remote.push(LookupOption::new("pet care", "Pet Care"));
        remote.push(LookupOption::new("frozen food", "Frozen Food"));
        let drift = category_drift(&remote);
        assert!(drift.missing_remotely.is_empty());
        assert_eq!(drift.unknown_locally, vec!["frozen food".to_string()]);
        assert!(!drift.is_empty());
    }
}
