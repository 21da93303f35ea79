mod calories;

pub use calories::coerce_calories;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A catalog entry. Loaded once, never modified afterwards.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "calories::deserialize")]
    pub calories: u32,
    #[serde(
        rename = "meal_type",
        alias = "category",
        default,
        deserialize_with = "lenient_text"
    )]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
}

impl Recipe {
    pub fn new(title: impl Into<String>, category: impl Into<String>, calories: u32) -> Self {
        Self {
            title: title.into(),
            calories,
            category: category.into(),
            url: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Category as used for pool membership: surrounding whitespace ignored.
    pub fn normalized_category(&self) -> &str {
        self.category.trim()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub value: String,
    pub label: String,
}

impl Category {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of recognized categories. Values are unique and non-blank.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryVocabulary(Vec<Category>);

impl CategoryVocabulary {
    pub fn new(categories: Vec<Category>) -> crate::Result<Self> {
        let mut seen = HashSet::new();

        for category in categories.iter() {
            if category.value.trim().is_empty() {
                crate::precondition!("category values must not be blank");
            }

            if category.value.trim() != category.value {
                crate::precondition!(
                    "category value '{}' has surrounding whitespace",
                    category.value
                );
            }

            if !seen.insert(category.value.as_str()) {
                crate::precondition!("duplicate category value '{}'", category.value);
            }
        }

        Ok(Self(categories))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.value.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|c| c.value == value)
    }

    pub fn label(&self, value: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
    }

    /// Same vocabulary minus the given values, order preserved.
    pub fn without(&self, excluded: &[String]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|c| !excluded.contains(&c.value))
                .cloned()
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self(
            [
                ("plat", "Plat"),
                ("dessert", "Dessert"),
                ("pain", "Pain"),
                ("boisson", "Boisson"),
                ("amuse-bouche", "Amuse-bouche"),
                ("fromage", "Fromage"),
                ("poisson", "Poisson"),
                ("viande", "Viande"),
                ("œuf", "Œuf"),
                ("accompagnement", "Accompagnement"),
                ("other", "Other"),
            ]
            .into_iter()
            .map(|(value, label)| Category::new(value, label))
            .collect(),
        )
    }
}

impl TryFrom<Vec<Category>> for CategoryVocabulary {
    type Error = crate::Error;

    fn try_from(value: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryVocabulary> for Vec<Category> {
    fn from(value: CategoryVocabulary) -> Self {
        value.0
    }
}
