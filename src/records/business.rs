//! Business record.
use serde::Deserialize;

/// Business categories.
///
/// Older dataset releases store categories as an array of strings,
/// newer ones as a single comma-separated string. Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    List(Vec<String>),
    Joined(String),
}

impl Default for Categories {
    fn default() -> Self {
        Categories::List(Vec::new())
    }
}

impl Categories {
    /// Exact (case-sensitive) membership test.
    pub fn contains(&self, category: &str) -> bool {
        match self {
            Categories::List(list) => list.iter().any(|c| c == category),
            Categories::Joined(joined) => joined.split(',').any(|c| c.trim() == category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Business {
    #[serde(alias = "id")]
    pub business_id: String,
    #[serde(deserialize_with = "nullable_categories")]
    pub categories: Categories,
}

// `categories` is required but may be `null`
fn nullable_categories<'de, D>(deserializer: D) -> Result<Categories, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let categories: Option<Categories> = Option::deserialize(deserializer)?;
    Ok(categories.unwrap_or_default())
}
