use crate::domain::{
    menu_analysis::entities::{AnalyzedMenuItem, HealthCategory, MenuItem, NutritionalInfo},
    profile::UserProfile,
};

const BASE_SCORE: i32 = 50;
const KEYWORD_WEIGHT: i32 = 5;

const HEALTHY_KEYWORDS: [&str; 7] = [
    "salad", "grilled", "steamed", "baked", "vegetable", "fruit", "lean",
];
const UNHEALTHY_KEYWORDS: [&str; 7] = [
    "fried",
    "cream",
    "butter",
    "sugar",
    "sweet",
    "chocolate",
    "bacon",
];

const PROTEIN_KEYWORDS: [&str; 4] = ["protein", "chicken", "beef", "fish"];
const NUTRIENT_DENSE_KEYWORDS: [&str; 2] = ["salad", "vegetable"];

pub const NO_WARNINGS: &str = "No specific warnings for your profile";

/// Scores a menu item for the given profile.
///
/// Keywords are matched as plain substrings of the lowercased name and description, so
/// "fried" also matches "stir-fried" and "lean" matches "clean".
pub fn score_menu_item(item: &MenuItem, profile: &UserProfile) -> AnalyzedMenuItem {
    let search_text = format!(
        "{} {}",
        item.name,
        item.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let health_score = health_score(&search_text);

    AnalyzedMenuItem {
        item: item.clone(),
        health_score,
        health_category: HealthCategory::from_score(health_score),
        nutritional_info: NutritionalInfo::new("15-20g", "30-40g", "10-15g", "300-400"),
        short_term_effects: strings(&["Provides moderate energy", "Typical digestion time"]),
        long_term_effects: strings(&["Neutral impact on health goals", "Balanced nutrient profile"]),
        modifications: strings(&[
            "Ask for dressing on the side to reduce calories",
            "Request less salt if watching sodium",
        ]),
        warnings: allergy_warnings(&search_text, profile),
        dietary_tags: dietary_tags(&search_text),
    }
}

fn health_score(search_text: &str) -> u8 {
    let bonus = count_matches(search_text, &HEALTHY_KEYWORDS);
    let penalty = count_matches(search_text, &UNHEALTHY_KEYWORDS);
    let score = BASE_SCORE + KEYWORD_WEIGHT * (bonus - penalty);

    score.clamp(0, 100) as u8
}

fn count_matches(search_text: &str, keywords: &[&str]) -> i32 {
    keywords.iter().filter(|k| search_text.contains(*k)).count() as i32
}

fn contains_any(search_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| search_text.contains(k))
}

fn dietary_tags(search_text: &str) -> Vec<String> {
    let mut tags = Vec::new();

    if contains_any(search_text, &PROTEIN_KEYWORDS) {
        tags.push("High-Protein".to_string());
    }
    if contains_any(search_text, &NUTRIENT_DENSE_KEYWORDS) {
        tags.push("Nutrient-Dense".to_string());
    }
    if search_text.contains("low") && contains_any(search_text, &["carb", "calorie"]) {
        tags.push("Low-Carb".to_string());
    }

    if tags.is_empty() {
        tags.push("Balanced".to_string());
    }
    tags
}

fn allergy_warnings(search_text: &str, profile: &UserProfile) -> Vec<String> {
    let mut warnings: Vec<String> = profile
        .declared_allergies()
        .filter(|allergy| search_text.contains(&allergy.to_lowercase()))
        .map(|allergy| format!("Contains {allergy}, which you are allergic to"))
        .collect();

    if warnings.is_empty() {
        warnings.push(NO_WARNINGS.to_string());
    }
    warnings
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, description: Option<&str>) -> MenuItem {
        MenuItem::new("1", name, description.map(str::to_string), "$10", "MAINS")
    }

    #[test]
    fn test_healthy_keywords_raise_score() {
        let analyzed = score_menu_item(
            &item("Grilled Salad with Lean Chicken", None),
            &UserProfile::default(),
        );

        assert_eq!(analyzed.health_score, 65);
        assert_eq!(analyzed.health_category, HealthCategory::Balanced);
        assert!(analyzed.dietary_tags.contains(&"High-Protein".to_string()));
        assert!(analyzed.dietary_tags.contains(&"Nutrient-Dense".to_string()));
        assert_eq!(analyzed.warnings, vec![NO_WARNINGS.to_string()]);
    }

    #[test]
    fn test_unhealthy_keywords_lower_score() {
        let analyzed = score_menu_item(
            &item("Deep Fried Bacon with Chocolate Sauce", None),
            &UserProfile::default(),
        );

        assert_eq!(analyzed.health_score, 35);
        assert_eq!(analyzed.health_category, HealthCategory::Balanced);
        assert_eq!(analyzed.dietary_tags, vec!["Balanced".to_string()]);
    }

    #[test]
    fn test_score_reaches_category_thresholds() {
        let healthy = score_menu_item(
            &item("Steamed vegetable salad", Some("baked fruit, grilled lean tofu")),
            &UserProfile::default(),
        );
        assert_eq!(healthy.health_score, 85);
        assert_eq!(healthy.health_category, HealthCategory::Healthiest);

        let indulgent = score_menu_item(
            &item("Fried chocolate cream", Some("butter, sugar, sweet bacon bits")),
            &UserProfile::default(),
        );
        assert_eq!(indulgent.health_score, 15);
        assert_eq!(indulgent.health_category, HealthCategory::Indulgent);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "clean" contains "lean", "stir-fried" contains "fried"
        let analyzed = score_menu_item(
            &item("Clean stir-fried noodles", None),
            &UserProfile::default(),
        );
        assert_eq!(analyzed.health_score, 50);
    }

    #[test]
    fn test_low_carb_tag() {
        let analyzed = score_menu_item(
            &item("Zoodles", Some("a low carb pasta swap")),
            &UserProfile::default(),
        );
        assert_eq!(analyzed.dietary_tags, vec!["Low-Carb".to_string()]);

        let only_low = score_menu_item(&item("Low tide oysters", None), &UserProfile::default());
        assert_eq!(only_low.dietary_tags, vec!["Balanced".to_string()]);
    }

    #[test]
    fn test_allergy_warning() {
        let profile = UserProfile {
            allergies: vec!["Peanuts".to_string()],
            ..Default::default()
        };

        let analyzed = score_menu_item(
            &item("Pad Thai", Some("rice noodles, crushed peanuts, lime")),
            &profile,
        );
        assert_eq!(
            analyzed.warnings,
            vec!["Contains Peanuts, which you are allergic to".to_string()]
        );
    }

    #[test]
    fn test_none_sentinel_and_blank_allergies_are_ignored() {
        let profile = UserProfile {
            allergies: vec!["None".to_string(), "".to_string()],
            ..Default::default()
        };

        let analyzed = score_menu_item(&item("None pizza left beef", None), &profile);
        assert_eq!(analyzed.warnings, vec![NO_WARNINGS.to_string()]);
    }

    #[test]
    fn test_scoring_is_pure() {
        let profile = UserProfile {
            allergies: vec!["Fish".to_string()],
            ..UserProfile::standard()
        };
        let menu_item = item("Baked fish", Some("with butter sauce"));

        let first = score_menu_item(&menu_item, &profile);
        let second = score_menu_item(&menu_item, &profile);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert!(!first.warnings.is_empty());
        assert!(!first.dietary_tags.is_empty());
    }
}
