use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::menu_analysis::entities::MenuItem;

/// Category given to items that appear before the first section header.
pub const DEFAULT_CATEGORY: &str = "Menu";

/// `Name, description - 19`
static ITEM_WITH_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[^,]+?)\s*,\s*(?P<description>.+?)\s+[-–—]\s+(?P<price>\$?\s*\d+(?:[.,]\d{1,2})?)$")
        .expect("item with description pattern is valid")
});

/// `Name - 9`
static ITEM_WITHOUT_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.+?)\s+[-–—]\s+(?P<price>\$?\s*\d+(?:[.,]\d{1,2})?)$")
        .expect("item without description pattern is valid")
});

/// Splits raw OCR text into menu items.
///
/// Section headers (all-caps lines) set the category of the items below them. Lines that
/// match neither a header nor an item are dropped, so malformed text only yields fewer items.
/// Ids are the 1-based position of the item in the text.
pub fn parse_menu_text(raw_text: &str) -> Vec<MenuItem> {
    let mut items = Vec::new();
    let mut category = DEFAULT_CATEGORY.to_string();

    for line in raw_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((name, description, price)) = match_item(line) {
            let id = (items.len() + 1).to_string();
            items.push(MenuItem::new(
                id,
                name,
                description,
                normalize_price(price),
                category.clone(),
            ));
        } else if is_section_header(line) {
            category = line.to_string();
        } else {
            tracing::trace!(line = %line, "skipping unrecognized menu line");
        }
    }

    items
}

fn match_item(line: &str) -> Option<(&str, Option<String>, &str)> {
    if let Some(caps) = ITEM_WITH_DESCRIPTION.captures(line) {
        let name = caps.name("name")?.as_str().trim();
        let description = caps.name("description")?.as_str().trim();
        let price = caps.name("price")?.as_str();
        let description = (!description.is_empty()).then(|| description.to_string());
        return Some((name, description, price));
    }

    let caps = ITEM_WITHOUT_DESCRIPTION.captures(line)?;
    let name = caps.name("name")?.as_str().trim();
    let price = caps.name("price")?.as_str();
    Some((name, None, price))
}

fn is_section_header(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

fn normalize_price(raw: &str) -> String {
    let amount: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '$').collect();
    format!("${amount}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_analysis::fallback::SAMPLE_MENU_TEXT;

    #[test]
    fn test_parse_sample_menu() {
        let items = parse_menu_text(SAMPLE_MENU_TEXT);

        assert_eq!(items.len(), 5);

        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Picante De La Casa");
        assert_eq!(
            items[0].description.as_deref(),
            Some("Cazadores Reposado, lime, chili, cilantro")
        );
        assert_eq!(items[0].price, "$19");
        assert_eq!(items[0].category, "HOUSE TONICS");

        assert_eq!(items[1].name, "Eastern Standard");
        assert_eq!(
            items[1].description.as_deref(),
            Some("42 Below or Bombay Sapphire, lime, cucumber, mint")
        );

        assert_eq!(items[2].id, "3");
        assert_eq!(items[2].name, "Bitburger non-alcoholic pilsner");
        assert_eq!(items[2].description, None);
        assert_eq!(items[2].price, "$9");
        assert_eq!(items[2].category, "BOTTLES & CAN");

        assert_eq!(items[4].name, "Peroni");
        assert_eq!(items[4].id, "5");
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_menu_text(SAMPLE_MENU_TEXT), parse_menu_text(SAMPLE_MENU_TEXT));
    }

    #[test]
    fn test_items_before_header_use_default_category() {
        let items = parse_menu_text("Garden Salad, mixed greens - $8.50\nSOUPS\nMiso - 4");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, DEFAULT_CATEGORY);
        assert_eq!(items[0].price, "$8.50");
        assert_eq!(items[1].category, "SOUPS");
        assert_eq!(items[1].price, "$4");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "Welcome!\n19\n-- - --\nToday's special is great\nDESSERTS\nChocolate Cake – 7";
        let items = parse_menu_text(text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Chocolate Cake");
        assert_eq!(items[0].category, "DESSERTS");
    }

    #[test]
    fn test_no_items() {
        assert!(parse_menu_text("").is_empty());
        assert!(parse_menu_text("JUST A HEADER\nand some prose").is_empty());
    }
}
