use menuplan_shared::recipe::Recipe;

use crate::week::{Day, Meal, Slot, Week};

/// Calories of an optional recipe. Catalog loading already normalized the
/// value, so an empty slot is the only source of 0 here besides the data.
pub fn recipe_calories(recipe: Option<&Recipe>) -> u32 {
    recipe.map(|r| r.calories).unwrap_or_default()
}

pub fn slot_calories(slot: &Slot) -> u32 {
    recipe_calories(slot.recipe.as_ref())
}

pub fn meal_calories(meal: &Meal) -> u64 {
    meal.slots.iter().map(|s| u64::from(slot_calories(s))).sum()
}

pub fn day_calories(day: &Day) -> u64 {
    day.meals.iter().map(meal_calories).sum()
}

pub fn week_calories(week: &Week) -> u64 {
    week.days().iter().map(day_calories).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> Day {
        Day::new(vec![
            Meal::new(vec![
                Slot::filled("plat", Recipe::new("Quiche lorraine", "plat", 540)),
                Slot::empty("dessert"),
            ]),
            Meal::new(vec![
                Slot::filled("boisson", Recipe::new("Eau", "boisson", 0)),
                Slot::filled("dessert", Recipe::new("Clafoutis", "dessert", 260)),
                Slot::filled("pain", Recipe::new("Pain de campagne", "pain", 180)),
            ]),
        ])
    }

    #[test]
    fn test_empty_slots_count_as_zero() {
        assert_eq!(recipe_calories(None), 0);
        assert_eq!(slot_calories(&Slot::empty("plat")), 0);
    }

    #[test]
    fn test_day_total_sums_every_slot() {
        let day = day();
        assert_eq!(meal_calories(&day.meals[0]), 540);
        assert_eq!(meal_calories(&day.meals[1]), 440);
        assert_eq!(day_calories(&day), 980);
    }

    #[test]
    fn test_day_total_ignores_order() {
        let day = day();

        let mut reversed = day.clone();
        reversed.meals.reverse();
        for meal in reversed.meals.iter_mut() {
            meal.slots.reverse();
        }

        assert_eq!(day_calories(&reversed), day_calories(&day));
    }

    #[test]
    fn test_week_total() {
        let days: [Day; 7] = std::array::from_fn(|d| if d % 2 == 0 { day() } else { Day::default() });
        assert_eq!(week_calories(&Week::new(days)), 980 * 4);
    }
}
