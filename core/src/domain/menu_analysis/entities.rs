use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_NUTRIENT: &str = "unknown";

/// A single dish or drink as it appears on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            price: price.into(),
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HealthCategory {
    Healthiest,
    Balanced,
    Indulgent,
}

impl HealthCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => HealthCategory::Healthiest,
            0..=30 => HealthCategory::Indulgent,
            _ => HealthCategory::Balanced,
        }
    }
}

fn unknown_nutrient() -> String {
    UNKNOWN_NUTRIENT.to_string()
}

/// Macro estimates as display ranges, e.g. `"15-20g"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    #[serde(default = "unknown_nutrient")]
    pub protein: String,
    #[serde(default = "unknown_nutrient")]
    pub carbs: String,
    #[serde(default = "unknown_nutrient")]
    pub fat: String,
    #[serde(default = "unknown_nutrient")]
    pub calories: String,
}

impl NutritionalInfo {
    pub fn new(protein: &str, carbs: &str, fat: &str, calories: &str) -> Self {
        Self {
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fat: fat.to_string(),
            calories: calories.to_string(),
        }
    }
}

impl Default for NutritionalInfo {
    fn default() -> Self {
        Self {
            protein: unknown_nutrient(),
            carbs: unknown_nutrient(),
            fat: unknown_nutrient(),
            calories: unknown_nutrient(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub health_score: u8,
    pub health_category: HealthCategory,
    #[serde(default)]
    pub nutritional_info: NutritionalInfo,
    pub short_term_effects: Vec<String>,
    pub long_term_effects: Vec<String>,
    pub modifications: Vec<String>,
    pub warnings: Vec<String>,
    pub dietary_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(HealthCategory::from_score(100), HealthCategory::Healthiest);
        assert_eq!(HealthCategory::from_score(70), HealthCategory::Healthiest);
        assert_eq!(HealthCategory::from_score(69), HealthCategory::Balanced);
        assert_eq!(HealthCategory::from_score(31), HealthCategory::Balanced);
        assert_eq!(HealthCategory::from_score(30), HealthCategory::Indulgent);
        assert_eq!(HealthCategory::from_score(0), HealthCategory::Indulgent);
    }

    #[test]
    fn test_missing_nutrients_become_unknown() {
        let info: NutritionalInfo = serde_json::from_value(json!({ "protein": "5g" })).unwrap();
        assert_eq!(info.protein, "5g");
        assert_eq!(info.carbs, UNKNOWN_NUTRIENT);
        assert_eq!(info.fat, UNKNOWN_NUTRIENT);
        assert_eq!(info.calories, UNKNOWN_NUTRIENT);
    }

    #[test]
    fn test_analyzed_item_wire_shape() {
        let analyzed = AnalyzedMenuItem {
            item: MenuItem::new("1", "Peroni", None, "$9", "BOTTLES & CAN"),
            health_score: 50,
            health_category: HealthCategory::Balanced,
            nutritional_info: NutritionalInfo::default(),
            short_term_effects: vec![],
            long_term_effects: vec![],
            modifications: vec![],
            warnings: vec!["No specific warnings for your profile".to_string()],
            dietary_tags: vec!["Balanced".to_string()],
        };

        let value = serde_json::to_value(&analyzed).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["name"], "Peroni");
        assert_eq!(value["healthScore"], 50);
        assert_eq!(value["healthCategory"], "Balanced");
        assert_eq!(value["nutritionalInfo"]["calories"], UNKNOWN_NUTRIENT);
        assert!(value.get("description").is_none());
    }
}
