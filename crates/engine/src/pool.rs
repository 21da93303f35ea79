use menuplan_shared::recipe::{CategoryVocabulary, Recipe};
use std::collections::HashMap;

/// Recipes grouped by recognized category.
///
/// Every category of the vocabulary has an entry, possibly empty. Pools are
/// rebuilt wholesale when the catalog changes.
#[derive(Clone, Debug, Default)]
pub struct Pools {
    order: Vec<String>,
    recipes: HashMap<String, Vec<Recipe>>,
}

impl Pools {
    /// Recipes of `category`, empty for unknown categories.
    pub fn get(&self, category: &str) -> &[Recipe] {
        self.recipes
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.recipes.contains_key(category)
    }

    /// Category names in vocabulary order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Recipe])> {
        self.categories().map(|category| (category, self.get(category)))
    }

    /// Number of recipes reachable through any pool.
    pub fn total(&self) -> usize {
        self.recipes.values().map(Vec::len).sum()
    }
}

/// Partitions the catalog by trimmed, case-sensitive category.
///
/// Recipes whose category is blank or not part of the vocabulary are left
/// out of every pool.
pub fn build_pools(catalog: &[Recipe], vocabulary: &CategoryVocabulary) -> Pools {
    let order: Vec<String> = vocabulary.values().map(str::to_owned).collect();
    let mut recipes: HashMap<String, Vec<Recipe>> = order
        .iter()
        .map(|category| (category.to_owned(), Vec::new()))
        .collect();

    let mut dropped = 0usize;

    for recipe in catalog {
        match recipes.get_mut(recipe.normalized_category()) {
            Some(pool) => pool.push(recipe.clone()),
            None => dropped += 1,
        }
    }

    tracing::debug!(
        catalog = catalog.len(),
        categories = order.len(),
        dropped,
        "built recipe pools"
    );

    Pools { order, recipes }
}
