//! Business category filter.
use crate::records::Business;

use super::Filter;

/// Category the pipeline selects by default.
pub const RESTAURANTS: &str = "Restaurants";

/// Keeps businesses whose categories contain `category` (exact match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Default for CategoryFilter {
    /// Restaurants filter.
    fn default() -> Self {
        Self::new(RESTAURANTS)
    }
}

impl Filter<&Business> for CategoryFilter {
    fn detect(&self, business: &Business) -> bool {
        business.categories.contains(&self.category)
    }
}
