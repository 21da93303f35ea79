use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calories::slot_calories;
use crate::ceiling::{Allowance, CalorieCeiling};
use crate::picker::pick_within;
use crate::pool::Pools;
use crate::week::{DAYS_PER_WEEK, Day, Meal, MealsPerDay, Slot, Week};

/// The two categories every new meal starts with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Skeleton {
    pub primary: String,
    pub secondary: String,
}

impl Skeleton {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    fn empty_slots(&self) -> Vec<Slot> {
        vec![
            Slot::empty(self.primary.as_str()),
            Slot::empty(self.secondary.as_str()),
        ]
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new("plat", "dessert")
    }
}

/// Builds and rebuilds weeks from a set of pools.
///
/// Allocation is greedy and order-sensitive: within a day, each slot may only
/// spend what the slots before it (earlier meals included) left over. Days are
/// independent of each other.
#[derive(Clone, Debug)]
pub struct Allocator<'a> {
    pools: &'a Pools,
    skeleton: Skeleton,
}

impl<'a> Allocator<'a> {
    pub fn new(pools: &'a Pools) -> Self {
        Self {
            pools,
            skeleton: Skeleton::default(),
        }
    }

    pub fn with_skeleton(mut self, skeleton: Skeleton) -> Self {
        self.skeleton = skeleton;
        self
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// A new week where every meal holds the two skeleton slots, drawn without
    /// any calorie limit. Empty pools leave slots empty.
    pub fn fresh_week<R: Rng + ?Sized>(&self, meals_per_day: MealsPerDay, rng: &mut R) -> Week {
        let days: [Day; DAYS_PER_WEEK] = std::array::from_fn(|_| {
            let meals = (0..meals_per_day.get())
                .map(|_| {
                    let slots = self
                        .skeleton
                        .empty_slots()
                        .into_iter()
                        .map(|slot| self.draw(slot.category, Allowance::Unconstrained, rng))
                        .collect();

                    Meal::new(slots)
                })
                .collect();

            Day::new(meals)
        });

        let week = Week::new(days);

        tracing::debug!(
            meals_per_day = meals_per_day.get(),
            empty = week.slots().filter(|s| s.is_empty()).count(),
            "generated fresh week"
        );

        week
    }

    /// Redraws every unlocked slot of `previous` under `ceiling`.
    ///
    /// Locked slots are copied untouched and still count against their day.
    /// An unlocked slot with an empty category draws from the primary category.
    /// Meals missing from `previous`, or without slots, get the skeleton.
    /// Meals past `meals_per_day` are dropped. `previous` is left as is.
    pub fn reallocate<R: Rng + ?Sized>(
        &self,
        previous: &Week,
        meals_per_day: MealsPerDay,
        ceiling: CalorieCeiling,
        rng: &mut R,
    ) -> Week {
        let mut days: [Day; DAYS_PER_WEEK] = Default::default();

        for (day, previous_day) in days.iter_mut().zip(previous.days()) {
            let mut used = 0u64;

            for m in 0..meals_per_day.get() {
                let base = match previous_day.meals.get(m) {
                    Some(meal) if !meal.slots.is_empty() => meal.slots.clone(),
                    _ => self.skeleton.empty_slots(),
                };

                let mut slots = Vec::with_capacity(base.len());

                for slot in base {
                    let slot = if slot.locked {
                        slot
                    } else if slot.category.is_empty() {
                        self.draw(self.skeleton.primary.clone(), ceiling.remaining(used), rng)
                    } else {
                        self.draw(slot.category, ceiling.remaining(used), rng)
                    };

                    used += u64::from(slot_calories(&slot));
                    slots.push(slot);
                }

                day.meals.push(Meal::new(slots));
            }
        }

        let week = Week::new(days);

        tracing::debug!(
            meals_per_day = meals_per_day.get(),
            %ceiling,
            locked = week.slots().filter(|s| s.locked).count(),
            empty = week.slots().filter(|s| s.is_empty()).count(),
            "reallocated week"
        );

        week
    }

    fn draw<R: Rng + ?Sized>(&self, category: String, allowance: Allowance, rng: &mut R) -> Slot {
        let recipe = pick_within(self.pools, &category, allowance, rng).cloned();

        Slot {
            category,
            recipe,
            locked: false,
        }
    }
}

/// [`Allocator::fresh_week`] with the default skeleton.
pub fn fresh_week<R: Rng + ?Sized>(pools: &Pools, meals_per_day: MealsPerDay, rng: &mut R) -> Week {
    Allocator::new(pools).fresh_week(meals_per_day, rng)
}

/// [`Allocator::reallocate`] with the default skeleton.
pub fn reallocate<R: Rng + ?Sized>(
    pools: &Pools,
    previous: &Week,
    meals_per_day: MealsPerDay,
    ceiling: CalorieCeiling,
    rng: &mut R,
) -> Week {
    Allocator::new(pools).reallocate(previous, meals_per_day, ceiling, rng)
}
