use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Placeholder entry meaning "nothing to declare" in allergy and condition lists.
pub const NONE_SENTINEL: &str = "None";

/// Activity level as sent by the client. Levels outside the known set are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
    Other(String),
}

impl ActivityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "VeryActive",
            ActivityLevel::Other(level) => level,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(level: String) -> Self {
        match level.as_str() {
            "Sedentary" => ActivityLevel::Sedentary,
            "Light" => ActivityLevel::Light,
            "Moderate" => ActivityLevel::Moderate,
            "Active" => ActivityLevel::Active,
            "VeryActive" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Other(level),
        }
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Other(level) => level,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_string_set")]
    pub dietary_preferences: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_set")]
    pub health_goals: Vec<String>,
    #[serde(default)]
    #[schema(value_type = String, example = "Moderate")]
    pub activity_level: ActivityLevel,
    #[serde(default, deserialize_with = "deserialize_string_set")]
    pub allergies: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_set")]
    pub medical_conditions: Vec<String>,
}

impl UserProfile {
    /// Profile used when the caller has not customised anything yet.
    pub fn standard() -> Self {
        Self {
            dietary_preferences: vec!["Balanced diet".to_string()],
            health_goals: vec![
                "Weight maintenance".to_string(),
                "Energy optimization".to_string(),
            ],
            activity_level: ActivityLevel::Moderate,
            allergies: Vec::new(),
            medical_conditions: Vec::new(),
        }
    }

    /// Allergies to check against, without the `"None"` sentinel or blank entries.
    pub fn declared_allergies(&self) -> impl Iterator<Item = &str> {
        declared(&self.allergies)
    }

    pub fn add_dietary_preference(&mut self, preference: impl Into<String>) {
        insert_unique(&mut self.dietary_preferences, preference.into());
    }

    pub fn remove_dietary_preference(&mut self, preference: &str) {
        self.dietary_preferences.retain(|p| p != preference);
    }

    pub fn add_health_goal(&mut self, goal: impl Into<String>) {
        insert_unique(&mut self.health_goals, goal.into());
    }

    pub fn remove_health_goal(&mut self, goal: &str) {
        self.health_goals.retain(|g| g != goal);
    }

    pub fn add_allergy(&mut self, allergy: impl Into<String>) {
        insert_unique(&mut self.allergies, allergy.into());
    }

    pub fn remove_allergy(&mut self, allergy: &str) {
        self.allergies.retain(|a| a != allergy);
    }

    pub fn set_activity_level(&mut self, level: ActivityLevel) {
        self.activity_level = level;
    }
}

fn declared(entries: &[String]) -> impl Iterator<Item = &str> {
    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| *entry != NONE_SENTINEL && !entry.trim().is_empty())
}

fn insert_unique(set: &mut Vec<String>, value: String) {
    if !set.contains(&value) {
        set.push(value);
    }
}

/// Accepts a list of arbitrary JSON values and keeps the distinct, non-blank strings in order.
/// Anything else in the list is dropped rather than failing the whole profile.
fn deserialize_string_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();

    let mut set = Vec::with_capacity(values.len());
    for value in values {
        if let serde_json::Value::String(entry) = value {
            if !entry.trim().is_empty() {
                insert_unique(&mut set, entry);
            }
        }
    }

    Ok(set)
}
