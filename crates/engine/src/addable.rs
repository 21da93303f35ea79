use menuplan_shared::recipe::{Category, CategoryVocabulary};

use crate::calories::day_calories;
use crate::ceiling::{Allowance, CalorieCeiling};
use crate::pool::Pools;
use crate::week::Week;

/// Budget left on `day_index`, `Unconstrained` without a ceiling.
pub fn day_remaining(
    week: &Week,
    day_index: usize,
    ceiling: CalorieCeiling,
) -> menuplan_shared::Result<Allowance> {
    let day = week.day(day_index)?;
    Ok(ceiling.remaining(day_calories(day)))
}

/// Categories a new slot on `day_index` could still be filled from.
///
/// A candidate qualifies when its pool has at least one recipe that fits the
/// day's remaining budget. With no budget left nothing qualifies.
pub fn addable_categories<'c>(
    week: &Week,
    pools: &Pools,
    day_index: usize,
    ceiling: CalorieCeiling,
    candidates: &'c CategoryVocabulary,
) -> menuplan_shared::Result<Vec<&'c Category>> {
    let remaining = day_remaining(week, day_index, ceiling)?;

    if remaining.is_exhausted() {
        return Ok(Vec::new());
    }

    Ok(candidates
        .iter()
        .filter(|category| {
            pools
                .get(&category.value)
                .iter()
                .any(|recipe| remaining.admits(recipe.calories))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::build_pools;
    use crate::week::{Meal, Slot};
    use menuplan_shared::recipe::Recipe;

    fn fixture() -> (Pools, CategoryVocabulary, Week) {
        let vocabulary = CategoryVocabulary::new(vec![
            Category::new("plat", "Plat"),
            Category::new("dessert", "Dessert"),
            Category::new("boisson", "Boisson"),
            Category::new("fromage", "Fromage"),
        ])
        .unwrap();

        let pools = build_pools(
            &[
                Recipe::new("Choucroute", "plat", 900),
                Recipe::new("Madeleines", "dessert", 250),
                Recipe::new("Thé", "boisson", 0),
            ],
            &vocabulary,
        );

        let mut week = Week::default();
        week.day_mut(1).unwrap().meals.push(Meal::new(vec![Slot::filled(
            "plat",
            Recipe::new("Choucroute", "plat", 900),
        )]));

        (pools, vocabulary, week)
    }

    #[test]
    fn test_unconstrained_offers_non_empty_pools() {
        let (pools, vocabulary, week) = fixture();

        let addable =
            addable_categories(&week, &pools, 1, CalorieCeiling::UNCONSTRAINED, &vocabulary)
                .unwrap();

        let values: Vec<_> = addable.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["plat", "dessert", "boisson"]);
    }

    #[test]
    fn test_constrained_offers_only_what_fits() {
        let (pools, vocabulary, week) = fixture();

        let addable =
            addable_categories(&week, &pools, 1, CalorieCeiling::new(1200), &vocabulary).unwrap();

        let values: Vec<_> = addable.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["dessert", "boisson"]);
    }

    #[test]
    fn test_exhausted_day_offers_nothing() {
        let (pools, vocabulary, week) = fixture();

        let addable =
            addable_categories(&week, &pools, 1, CalorieCeiling::new(900), &vocabulary).unwrap();
        assert!(addable.is_empty(), "zero-calorie drinks are not offered at 0 kcal left");

        assert_eq!(
            day_remaining(&week, 1, CalorieCeiling::new(900)).unwrap(),
            Allowance::Remaining(0)
        );
    }

    #[test]
    fn test_day_index_out_of_range() {
        let (pools, vocabulary, week) = fixture();

        let err = addable_categories(&week, &pools, 7, CalorieCeiling::new(900), &vocabulary)
            .unwrap_err();
        assert!(err.is_precondition());
    }
}
