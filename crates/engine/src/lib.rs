//! Weekly menu allocation under a daily calorie ceiling.
//!
//! Everything here is a pure function of its inputs. Randomness comes from
//! the `rand::Rng` the caller passes in, so a seeded generator gives
//! reproducible weeks.

pub mod addable;
pub mod allocator;
pub mod audit;
pub mod calories;
pub mod ceiling;
pub mod edit;
pub mod picker;
pub mod pool;
pub mod search;
pub mod week;

pub use addable::{addable_categories, day_remaining};
pub use allocator::{Allocator, Skeleton, fresh_week, reallocate};
pub use audit::{OverBudgetDay, StatusReport, audit};
pub use calories::{day_calories, meal_calories, recipe_calories, week_calories};
pub use ceiling::{Allowance, CalorieCeiling};
pub use edit::{
    add_slot, assign_recipe, change_category, remove_slot, reroll_slot, slot_allowance, toggle_lock,
};
pub use picker::{pick, pick_within};
pub use pool::{Pools, build_pools};
pub use search::{SEARCH_LIMIT, search};
pub use week::{DAYS_PER_WEEK, Day, Meal, MealsPerDay, Slot, SlotRef, Week};
