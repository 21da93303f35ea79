//! Single-slot edits on a week the caller owns.
//!
//! Every edit validates coordinates first and leaves the week untouched when
//! it is refused. Callers that share a week between threads must serialize
//! these calls with [`crate::allocator::Allocator::reallocate`].

use menuplan_shared::recipe::Recipe;
use rand::Rng;

use crate::calories::{day_calories, slot_calories};
use crate::ceiling::{Allowance, CalorieCeiling};
use crate::picker::pick_within;
use crate::pool::Pools;
use crate::week::{Slot, SlotRef, Week};

/// Budget the slot at `at` may use: the day's ceiling minus every other slot
/// of that day.
pub fn slot_allowance(
    week: &Week,
    at: SlotRef,
    ceiling: CalorieCeiling,
) -> menuplan_shared::Result<Allowance> {
    let current = slot_calories(week.slot(at)?);
    let others = day_calories(week.day(at.day)?) - u64::from(current);

    Ok(ceiling.remaining(others))
}

pub fn toggle_lock(week: &mut Week, at: SlotRef) -> menuplan_shared::Result<bool> {
    let slot = week.slot_mut(at)?;
    slot.locked = !slot.locked;

    tracing::debug!(%at, locked = slot.locked, "toggled slot lock");

    Ok(slot.locked)
}

/// Draws another recipe of the same category.
///
/// Under a ceiling, a draw that finds nothing is refused and the current
/// recipe stays. Without one, an empty pool empties the slot.
pub fn reroll_slot<R: Rng + ?Sized>(
    week: &mut Week,
    pools: &Pools,
    at: SlotRef,
    ceiling: CalorieCeiling,
    rng: &mut R,
) -> menuplan_shared::Result<()> {
    ensure_unlocked(week.slot(at)?, "rerolled")?;

    let allowance = slot_allowance(week, at, ceiling)?;
    let slot = week.slot_mut(at)?;
    let next = draw_or_refuse(pools, &slot.category, allowance, rng)?;

    slot.recipe = next;

    Ok(())
}

/// Switches the slot to `category` and draws a recipe for it.
pub fn change_category<R: Rng + ?Sized>(
    week: &mut Week,
    pools: &Pools,
    at: SlotRef,
    category: &str,
    ceiling: CalorieCeiling,
    rng: &mut R,
) -> menuplan_shared::Result<()> {
    ensure_unlocked(week.slot(at)?, "changed")?;

    let allowance = slot_allowance(week, at, ceiling)?;
    let next = draw_or_refuse(pools, category, allowance, rng)?;

    let slot = week.slot_mut(at)?;
    slot.category = category.to_owned();
    slot.recipe = next;
    slot.locked = false;

    Ok(())
}

/// Puts a hand-picked recipe in the slot and locks it.
pub fn assign_recipe(
    week: &mut Week,
    at: SlotRef,
    recipe: Recipe,
    ceiling: CalorieCeiling,
) -> menuplan_shared::Result<()> {
    ensure_unlocked(week.slot(at)?, "changed")?;

    let allowance = slot_allowance(week, at, ceiling)?;
    if !allowance.admits(recipe.calories) {
        menuplan_shared::user!(
            "'{}' is too rich for this day: {} kcal, {} kcal left",
            recipe.title,
            recipe.calories,
            left(allowance)
        );
    }

    let slot = week.slot_mut(at)?;
    slot.recipe = Some(recipe);
    slot.locked = true;

    Ok(())
}

/// Appends a slot of `category` to a meal and returns its index.
pub fn add_slot<R: Rng + ?Sized>(
    week: &mut Week,
    pools: &Pools,
    day: usize,
    meal: usize,
    category: &str,
    ceiling: CalorieCeiling,
    rng: &mut R,
) -> menuplan_shared::Result<usize> {
    let allowance = ceiling.remaining(day_calories(week.day(day)?));
    let meal = week.meal_mut(day, meal)?;
    let recipe = draw_or_refuse(pools, category, allowance, rng)?;

    meal.slots.push(Slot {
        category: category.to_owned(),
        recipe,
        locked: false,
    });

    Ok(meal.slots.len() - 1)
}

/// Removes an unlocked slot. The last slot of a meal stays; `false` then.
pub fn remove_slot(week: &mut Week, at: SlotRef) -> menuplan_shared::Result<bool> {
    ensure_unlocked(week.slot(at)?, "removed")?;

    let meal = week.meal_mut(at.day, at.meal)?;
    if meal.slots.len() <= 1 {
        return Ok(false);
    }

    meal.slots.remove(at.slot);

    Ok(true)
}

fn ensure_unlocked(slot: &Slot, action: &str) -> menuplan_shared::Result<()> {
    if slot.locked {
        menuplan_shared::user!("locked slot cannot be {}, unlock it first", action);
    }

    Ok(())
}

fn draw_or_refuse<R: Rng + ?Sized>(
    pools: &Pools,
    category: &str,
    allowance: Allowance,
    rng: &mut R,
) -> menuplan_shared::Result<Option<Recipe>> {
    let next = pick_within(pools, category, allowance, rng).cloned();

    if next.is_none() && allowance != Allowance::Unconstrained {
        menuplan_shared::user!(
            "no '{}' recipe fits the {} kcal left for this day",
            category,
            left(allowance)
        );
    }

    Ok(next)
}

fn left(allowance: Allowance) -> i64 {
    match allowance {
        Allowance::Remaining(remaining) => remaining.max(0),
        Allowance::Unconstrained => i64::MAX,
    }
}
