use serde::{Deserialize, Serialize};
use tracing::warn;

use techsphere_common::Color;

use crate::category::Category;

/// A single catalog item rendered as one tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TechnologyRecord")]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub abbr: String,
    pub categories: Vec<Category>,
    /// Icon path relative to the asset directory; only the atlas builder reads it.
    pub icon: String,
    pub background_color: String,
    pub url: String,
}

impl Technology {
    pub fn in_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// The tile background, or `fallback` when the catalog value is empty or not a hex color.
    pub fn background(&self, fallback: Color) -> Color {
        if self.background_color.is_empty() {
            return fallback;
        }
        Color::from_hex(&self.background_color).unwrap_or_else(|| {
            warn!(
                "technology '{}' has unparsable backgroundColor {:?}",
                self.id, self.background_color
            );
            fallback
        })
    }
}

/// On-disk shape of a technology. Categories stay as strings so that an
/// unknown key drops only that category instead of failing the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TechnologyRecord {
    id: String,
    name: String,
    #[serde(default)]
    abbr: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    background_color: String,
    #[serde(default)]
    url: String,
}

impl From<TechnologyRecord> for Technology {
    fn from(record: TechnologyRecord) -> Self {
        let mut categories = Vec::with_capacity(record.categories.len());
        for key in &record.categories {
            match key.parse::<Category>() {
                Ok(category) if !categories.contains(&category) => categories.push(category),
                Ok(_) => {}
                Err(e) => warn!("technology '{}': {e}, ignoring", record.id),
            }
        }

        Self {
            id: record.id,
            name: record.name,
            abbr: record.abbr,
            categories,
            icon: record.icon,
            background_color: record.background_color,
            url: record.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Technology {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_camel_case_record() {
        let tech = parse(
            r##"{
                "id": "kotlin",
                "name": "Kotlin",
                "abbr": "Kt",
                "categories": ["languages", "java/jvm"],
                "icon": "kotlin.svg",
                "backgroundColor": "#7f52ff",
                "url": "https://kotlinlang.org"
            }"##,
        );
        assert_eq!(tech.id, "kotlin");
        assert_eq!(tech.categories, vec![Category::Languages, Category::JavaJvm]);
        assert_eq!(tech.background_color, "#7f52ff");
        assert!(tech.in_category(Category::JavaJvm));
        assert!(!tech.in_category(Category::Web));
    }

    #[test]
    fn unknown_and_duplicate_categories_are_dropped() {
        let tech = parse(r#"{"id": "x", "name": "X", "categories": ["web", "cooking", "web"]}"#);
        assert_eq!(tech.categories, vec![Category::Web]);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let tech = parse(r#"{"id": "bare", "name": "Bare"}"#);
        assert!(tech.categories.is_empty());
        assert!(tech.icon.is_empty());
        assert!(tech.url.is_empty());
    }

    #[test]
    fn background_falls_back() {
        let fallback = Color::from_rgb(0xde, 0xe2, 0xe6);
        let mut tech = parse(r##"{"id": "a", "name": "A", "backgroundColor": "#000000"}"##);
        assert_eq!(tech.background(fallback), Color::from_rgb(0, 0, 0));

        tech.background_color = String::new();
        assert_eq!(tech.background(fallback), fallback);

        tech.background_color = "tomato".into();
        assert_eq!(tech.background(fallback), fallback);
    }

    #[test]
    fn serializes_with_catalog_keys() {
        let tech = parse(
            r##"{"id": "a", "name": "A", "categories": ["devops"], "backgroundColor": "#fff"}"##,
        );
        let json = serde_json::to_string(&tech).unwrap();
        assert!(json.contains("\"backgroundColor\":\"#fff\""));
        assert!(json.contains("\"categories\":[\"devops\"]"));
    }
}
