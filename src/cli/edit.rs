use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use menuplan_engine::{
    Week, add_slot, assign_recipe, change_category, remove_slot, reroll_slot, toggle_lock,
};

use super::SlotArgs;
use crate::config::Config;

#[derive(Args, Debug, Clone)]
pub struct RerollArgs {
    #[command(flatten)]
    pub at: SlotArgs,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    pub ceiling: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ChangeArgs {
    #[command(flatten)]
    pub at: SlotArgs,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    pub ceiling: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct AssignArgs {
    #[command(flatten)]
    pub at: SlotArgs,
    /// Recipe title, matched case-insensitively
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    pub ceiling: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub week: PathBuf,
    #[arg(long)]
    pub day: usize,
    #[arg(long)]
    pub meal: usize,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    pub ceiling: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn lock(args: SlotArgs) -> Result<()> {
    let mut week = crate::catalog::load_week(&args.week).await?;

    let locked = toggle_lock(&mut week, args.slot_ref())?;
    crate::catalog::save_week(&args.week, &week).await?;

    println!("{} {}", args.slot_ref(), if locked { "locked" } else { "unlocked" });

    Ok(())
}

pub async fn reroll(config: Config, args: RerollArgs) -> Result<()> {
    let mut week = crate::catalog::load_week(&args.at.week).await?;
    let (_, pools) = super::load_pools(&config, args.catalog.as_deref()).await?;
    let ceiling = super::ceiling(&config, args.ceiling);
    let mut rng = super::rng(args.seed);

    reroll_slot(&mut week, &pools, args.at.slot_ref(), ceiling, &mut rng)?;

    save_and_show(&args.at, &week).await
}

pub async fn change(config: Config, args: ChangeArgs) -> Result<()> {
    let mut week = crate::catalog::load_week(&args.at.week).await?;
    let (_, pools) = super::load_pools(&config, args.catalog.as_deref()).await?;
    let ceiling = super::ceiling(&config, args.ceiling);
    let mut rng = super::rng(args.seed);

    change_category(
        &mut week,
        &pools,
        args.at.slot_ref(),
        &args.category,
        ceiling,
        &mut rng,
    )?;

    save_and_show(&args.at, &week).await
}

pub async fn assign(config: Config, args: AssignArgs) -> Result<()> {
    let mut week = crate::catalog::load_week(&args.at.week).await?;
    let (recipes, _) = super::load_pools(&config, args.catalog.as_deref()).await?;
    let ceiling = super::ceiling(&config, args.ceiling);

    let wanted = args.title.trim().to_lowercase();
    let Some(recipe) = recipes
        .into_iter()
        .find(|recipe| recipe.title.trim().to_lowercase() == wanted)
    else {
        anyhow::bail!("no recipe titled '{}' in the catalog", args.title);
    };

    assign_recipe(&mut week, args.at.slot_ref(), recipe, ceiling)?;

    save_and_show(&args.at, &week).await
}

pub async fn add(config: Config, args: AddArgs) -> Result<()> {
    let mut week = crate::catalog::load_week(&args.week).await?;
    let (_, pools) = super::load_pools(&config, args.catalog.as_deref()).await?;
    let ceiling = super::ceiling(&config, args.ceiling);
    let mut rng = super::rng(args.seed);

    let index = add_slot(
        &mut week,
        &pools,
        args.day,
        args.meal,
        &args.category,
        ceiling,
        &mut rng,
    )?;
    crate::catalog::save_week(&args.week, &week).await?;

    let at = SlotArgs {
        week: args.week,
        day: args.day,
        meal: args.meal,
        slot: index,
    };
    show(&at, &week)
}

pub async fn remove(args: SlotArgs) -> Result<()> {
    let mut week = crate::catalog::load_week(&args.week).await?;

    if remove_slot(&mut week, args.slot_ref())? {
        crate::catalog::save_week(&args.week, &week).await?;
        println!("{} removed", args.slot_ref());
    } else {
        println!("{} is the last slot of its meal, kept", args.slot_ref());
    }

    Ok(())
}

async fn save_and_show(at: &SlotArgs, week: &Week) -> Result<()> {
    crate::catalog::save_week(&at.week, week).await?;
    show(at, week)
}

fn show(at: &SlotArgs, week: &Week) -> Result<()> {
    let slot = week.slot(at.slot_ref())?;
    match &slot.recipe {
        Some(recipe) => println!(
            "{} [{}] {} — {} kcal",
            at.slot_ref(),
            slot.category,
            recipe.title,
            recipe.calories
        ),
        None => println!("{} [{}] —", at.slot_ref(), slot.category),
    }

    Ok(())
}
