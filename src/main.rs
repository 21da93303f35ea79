use anyhow::Result;
use clap::{Parser, Subcommand};
use menuplan::cli::{
    SlotArgs,
    edit::{AddArgs, AssignArgs, ChangeArgs, RerollArgs},
    generate::GenerateArgs,
    inspect::{AddableArgs, AuditArgs, SearchArgs},
};

/// menuplan - Weekly menus under a daily calorie ceiling
#[derive(Parser)]
#[command(name = "menuplan")]
#[command(about = "Weekly menu allocation under a daily calorie ceiling", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a week, keeping locked slots of a previous one
    Generate(GenerateArgs),
    /// Report over-budget days and empty slots of a stored week
    Audit(AuditArgs),
    /// List categories a new slot could still be filled from
    Addable(AddableArgs),
    /// Search the catalog by title
    Search(SearchArgs),
    /// Toggle the lock of a slot
    Lock(SlotArgs),
    /// Draw another recipe for a slot
    Reroll(RerollArgs),
    /// Switch a slot to another category and draw for it
    Change(ChangeArgs),
    /// Put a named recipe in a slot and lock it
    Assign(AssignArgs),
    /// Append a slot to a meal
    Add(AddArgs),
    /// Remove a slot from a meal
    Remove(SlotArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = menuplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    menuplan::observability::init_observability(env!("CARGO_PKG_VERSION"), &config.logging)?;

    match cli.command {
        Commands::Generate(args) => menuplan::cli::generate::generate(config, args).await,
        Commands::Audit(args) => menuplan::cli::inspect::audit_week(config, args).await,
        Commands::Addable(args) => menuplan::cli::inspect::addable(config, args).await,
        Commands::Search(args) => menuplan::cli::inspect::search_recipes(config, args).await,
        Commands::Lock(args) => menuplan::cli::edit::lock(args).await,
        Commands::Reroll(args) => menuplan::cli::edit::reroll(config, args).await,
        Commands::Change(args) => menuplan::cli::edit::change(config, args).await,
        Commands::Assign(args) => menuplan::cli::edit::assign(config, args).await,
        Commands::Add(args) => menuplan::cli::edit::add(config, args).await,
        Commands::Remove(args) => menuplan::cli::edit::remove(args).await,
    }
}
