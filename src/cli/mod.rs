pub mod edit;
pub mod generate;
pub mod inspect;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use menuplan_engine::{CalorieCeiling, Pools, SlotRef, build_pools};
use menuplan_shared::recipe::Recipe;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Coordinates of one slot in a stored week
#[derive(Args, Debug, Clone)]
pub struct SlotArgs {
    /// Week file to edit in place
    #[arg(long)]
    pub week: PathBuf,
    /// Day position in the week (0..=6)
    #[arg(long)]
    pub day: usize,
    #[arg(long)]
    pub meal: usize,
    #[arg(long)]
    pub slot: usize,
}

impl SlotArgs {
    pub fn slot_ref(&self) -> SlotRef {
        SlotRef::new(self.day, self.meal, self.slot)
    }
}

/// Seeded generator when `seed` is given, entropy seeded otherwise.
pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub(crate) fn ceiling(config: &Config, calorie_ceiling: Option<u32>) -> CalorieCeiling {
    calorie_ceiling
        .map(CalorieCeiling::new)
        .unwrap_or_else(|| config.menu.ceiling())
}

pub(crate) async fn load_pools(
    config: &Config,
    catalog: Option<&Path>,
) -> Result<(Vec<Recipe>, Pools)> {
    let path = catalog.unwrap_or(config.menu.catalog_path.as_path());
    let recipes = crate::catalog::load_catalog(path).await?;
    let pools = build_pools(&recipes, &config.menu.categories);

    Ok((recipes, pools))
}
