use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use menuplan_engine::{Allowance, SEARCH_LIMIT, addable_categories, audit, day_remaining, search};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[arg(long)]
    pub week: PathBuf,
    #[arg(long)]
    pub ceiling: Option<u32>,
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub async fn audit_week(config: Config, args: AuditArgs) -> Result<()> {
    let week = crate::catalog::load_week(&args.week).await?;
    let ceiling = super::ceiling(&config, args.ceiling);
    let status = audit(&week, ceiling);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Text => {
            match crate::render::status_message(&status, config.menu.week_start) {
                Some(message) => println!("{message}"),
                None => println!("{} empty slot(s), ceiling {ceiling}", status.empty_slot_count),
            }
        }
    }

    Ok(())
}

#[derive(Args, Debug, Clone)]
pub struct AddableArgs {
    #[arg(long)]
    pub week: PathBuf,
    #[arg(long)]
    pub day: usize,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long)]
    pub ceiling: Option<u32>,
}

pub async fn addable(config: Config, args: AddableArgs) -> Result<()> {
    let week = crate::catalog::load_week(&args.week).await?;
    let (_, pools) = super::load_pools(&config, args.catalog.as_deref()).await?;
    let ceiling = super::ceiling(&config, args.ceiling);
    let candidates = config.menu.addable();

    match day_remaining(&week, args.day, ceiling)? {
        Allowance::Unconstrained => println!("no ceiling"),
        Allowance::Remaining(kcal) => println!("{kcal} kcal left"),
    }

    let categories = addable_categories(&week, &pools, args.day, ceiling, &candidates)?;
    if categories.is_empty() {
        println!("nothing fits on this day");
    }
    for category in categories {
        println!("{}\t{}", category.value, category.label);
    }

    Ok(())
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[arg(long)]
    pub query: String,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Only search this category's pool
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, default_value_t = SEARCH_LIMIT)]
    pub limit: usize,
}

pub async fn search_recipes(config: Config, args: SearchArgs) -> Result<()> {
    let (recipes, pools) = super::load_pools(&config, args.catalog.as_deref()).await?;

    let scope = match &args.category {
        Some(category) => pools.get(category),
        None => recipes.as_slice(),
    };

    for recipe in search(scope, &args.query, args.limit) {
        println!(
            "{} — {} kcal [{}]",
            recipe.title,
            recipe.calories,
            recipe.normalized_category()
        );
    }

    Ok(())
}
