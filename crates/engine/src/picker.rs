use menuplan_shared::recipe::Recipe;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::ceiling::{Allowance, CalorieCeiling};
use crate::pool::Pools;

/// Draws a recipe of `category` whose calories fit under `ceiling`.
///
/// An unconstrained ceiling draws from the whole pool. Returns `None` when the
/// pool is empty or nothing fits.
pub fn pick<'p, R: Rng + ?Sized>(
    pools: &'p Pools,
    category: &str,
    ceiling: CalorieCeiling,
    rng: &mut R,
) -> Option<&'p Recipe> {
    pick_within(pools, category, ceiling.into(), rng)
}

/// Same as [`pick`] against a running budget.
///
/// Unlike a ceiling, a remaining budget of zero or less is still a
/// constraint: only zero-calorie recipes, if any, remain eligible.
pub fn pick_within<'p, R: Rng + ?Sized>(
    pools: &'p Pools,
    category: &str,
    allowance: Allowance,
    rng: &mut R,
) -> Option<&'p Recipe> {
    let pool = pools.get(category);

    if pool.is_empty() {
        tracing::trace!(category, "empty pool");
        return None;
    }

    let picked = match allowance {
        Allowance::Unconstrained => pool.choose(rng),
        Allowance::Remaining(_) => {
            let eligible: Vec<&Recipe> = pool
                .iter()
                .filter(|recipe| allowance.admits(recipe.calories))
                .collect();

            eligible.choose(rng).copied()
        }
    };

    tracing::trace!(
        category,
        ?allowance,
        picked = picked.map(|r| r.title.as_str()),
        "drew recipe"
    );

    picked
}
