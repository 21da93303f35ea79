use menuplan_shared::recipe::Recipe;

/// Results shown for a single manual search.
pub const SEARCH_LIMIT: usize = 30;

/// Recipes whose title contains `query`, case-insensitively, in input order.
/// A blank query matches everything.
pub fn search<'r>(recipes: &'r [Recipe], query: &str, limit: usize) -> Vec<&'r Recipe> {
    let query = query.trim().to_lowercase();

    recipes
        .iter()
        .filter(|recipe| query.is_empty() || recipe.title.to_lowercase().contains(&query))
        .take(limit)
        .collect()
}
