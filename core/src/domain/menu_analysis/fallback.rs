use crate::domain::menu_analysis::entities::{
    AnalyzedMenuItem, HealthCategory, MenuItem, NutritionalInfo,
};

/// Canned OCR output used when no text detection service is configured.
pub const SAMPLE_MENU_TEXT: &str = "SOHO WAREHOUSE

HOUSE TONICS
Picante De La Casa, Cazadores Reposado, lime, chili, cilantro - 19
Eastern Standard, 42 Below or Bombay Sapphire, lime, cucumber, mint - 19

BOTTLES & CAN
Bitburger non-alcoholic pilsner - 9
Modelo Especial - 9
Peroni - 9";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

const ALCOHOL_WARNING: &str = "Contains alcohol - not suitable during pregnancy or when driving";

/// Results shown when a run fails, so the caller always has something to render.
pub fn sample_analyzed_items() -> Vec<AnalyzedMenuItem> {
    vec![
        AnalyzedMenuItem {
            item: MenuItem::new(
                "1",
                "Picante De La Casa",
                Some("Cazadores Reposado, lime, chili, cilantro".to_string()),
                "$19",
                "HOUSE TONICS",
            ),
            health_score: 45,
            health_category: HealthCategory::Balanced,
            nutritional_info: NutritionalInfo::new("0-2g", "5-8g", "0-1g", "120-150"),
            short_term_effects: strings(&[
                "Moderate alcohol content may cause mild relaxation",
                "Chili can boost metabolism temporarily",
                "May cause mild dehydration due to alcohol content",
            ]),
            long_term_effects: strings(&[
                "Regular consumption may contribute to increased alcohol tolerance",
                "Moderate impact on liver health if consumed regularly",
                "Neutral impact on weight management goals",
            ]),
            modifications: strings(&[
                "Ask for less alcohol for a lighter option",
                "Request extra lime for vitamin C boost",
                "Ask for mild chili if you're sensitive to spice",
            ]),
            warnings: strings(&[ALCOHOL_WARNING]),
            dietary_tags: strings(&["Contains alcohol", "Gluten-free", "Low calorie"]),
        },
        AnalyzedMenuItem {
            item: MenuItem::new(
                "2",
                "Eastern Standard",
                Some("42 Below or Bombay Sapphire, lime, cucumber, mint".to_string()),
                "$19",
                "HOUSE TONICS",
            ),
            health_score: 48,
            health_category: HealthCategory::Balanced,
            nutritional_info: NutritionalInfo::new("0-1g", "6-9g", "0-1g", "130-160"),
            short_term_effects: strings(&[
                "Cucumber and mint provide refreshing hydration",
                "Moderate alcohol content may cause mild relaxation",
                "Mint may aid digestion",
            ]),
            long_term_effects: strings(&[
                "Regular consumption may contribute to increased alcohol tolerance",
                "Moderate impact on liver health if consumed regularly",
                "Neutral impact on weight management goals",
            ]),
            modifications: strings(&[
                "Ask for extra cucumber for added hydration",
                "Request less alcohol for a lighter option",
                "Add a splash of soda water to dilute alcohol content",
            ]),
            warnings: strings(&[ALCOHOL_WARNING]),
            dietary_tags: strings(&["Contains alcohol", "Gluten-free", "Low calorie"]),
        },
        AnalyzedMenuItem {
            item: MenuItem::new(
                "3",
                "Bitburger non-alcoholic pilsner",
                Some("Non-alcoholic beer from Germany".to_string()),
                "$9",
                "BOTTLES & CAN",
            ),
            health_score: 78,
            health_category: HealthCategory::Healthiest,
            nutritional_info: NutritionalInfo::new("0-1g", "10-15g", "0g", "50-80"),
            short_term_effects: strings(&[
                "No alcohol means no impairment or relaxation effects",
                "Provides hydration similar to other non-alcoholic beverages",
                "Beer flavor without alcohol-related side effects",
            ]),
            long_term_effects: strings(&[
                "No impact on liver health from alcohol",
                "Lower calorie content supports weight management goals",
                "Suitable for those avoiding alcohol for health, religious, or personal reasons",
            ]),
            modifications: strings(&["None needed - already a healthier alternative"]),
            warnings: strings(&[
                "May contain trace amounts of alcohol (typically <0.5%)",
                "Still contains calories and carbs despite being non-alcoholic",
            ]),
            dietary_tags: strings(&["Non-alcoholic", "Low calorie"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_are_consistent() {
        let items = sample_analyzed_items();

        let scores: Vec<u8> = items.iter().map(|i| i.health_score).collect();
        assert_eq!(scores, vec![45, 48, 78]);

        for item in &items {
            assert_eq!(
                item.health_category,
                HealthCategory::from_score(item.health_score)
            );
            assert!(!item.warnings.is_empty());
            assert!(!item.dietary_tags.is_empty());
        }
    }
}
