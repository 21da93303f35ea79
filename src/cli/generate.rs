use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use menuplan_engine::{Allocator, MealsPerDay, StatusReport, Week, audit};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Recipe catalog (overrides config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Meals per day (overrides config file)
    #[arg(long)]
    pub meals: Option<u8>,
    /// Daily calorie ceiling, 0 for none (overrides config file)
    #[arg(long)]
    pub ceiling: Option<u32>,
    /// Previous week whose locked slots are kept
    #[arg(long)]
    pub previous: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the generated week to this file
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub week: Week,
    pub status: StatusReport,
}

/// Build a week under the ceiling, reusing `--previous` when it holds 7 days.
pub async fn build(config: &Config, args: &GenerateArgs) -> Result<Generated> {
    let (recipes, pools) = super::load_pools(config, args.catalog.as_deref()).await?;
    if recipes.is_empty() {
        anyhow::bail!("no recipes available");
    }

    let meals = match args.meals {
        Some(meals) => MealsPerDay::try_from(meals)?,
        None => config.menu.meals_per_day()?,
    };
    let ceiling = super::ceiling(config, args.ceiling);
    let mut rng = super::rng(args.seed);

    let allocator = Allocator::new(&pools).with_skeleton(config.menu.skeleton());

    let previous = match &args.previous {
        Some(path) => crate::catalog::load_previous_week(path).await?,
        None => None,
    };
    let base = match previous {
        Some(week) => week,
        None => allocator.fresh_week(meals, &mut rng),
    };

    let week = allocator.reallocate(&base, meals, ceiling, &mut rng);
    let status = audit(&week, ceiling);

    tracing::info!(
        meals = meals.get(),
        %ceiling,
        over_budget = status.over_budget_days.len(),
        empty_slots = status.empty_slot_count,
        "week generated"
    );

    Ok(Generated { week, status })
}

pub async fn generate(config: Config, args: GenerateArgs) -> Result<()> {
    let Generated { week, status } = build(&config, &args).await?;

    if let Some(out) = &args.out {
        crate::catalog::save_week(out, &week).await?;
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "week": week, "status": status });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            print!("{}", crate::render::render_week(&week, config.menu.week_start));
            if let Some(message) = crate::render::status_message(&status, config.menu.week_start) {
                println!();
                println!("{message}");
            }
        }
    }

    Ok(())
}
