use std::env;
use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use menuplan_engine::{CalorieCeiling, MealsPerDay, Skeleton};
use menuplan_shared::recipe::CategoryVocabulary;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u8,
    /// Daily calorie ceiling, 0 leaves days unconstrained
    #[serde(default)]
    pub calorie_ceiling: u32,
    #[serde(default = "default_primary_category")]
    pub primary_category: String,
    #[serde(default = "default_secondary_category")]
    pub secondary_category: String,
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// Duplicate values are rejected while loading
    #[serde(default)]
    pub categories: CategoryVocabulary,
    /// Categories the add-slot query never offers
    #[serde(default = "default_addable_exclude")]
    pub addable_exclude: Vec<String>,
    /// First day of the week, 0 = Sunday .. 6 = Saturday
    #[serde(default = "default_week_start")]
    pub week_start: u8,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            meals_per_day: default_meals_per_day(),
            calorie_ceiling: 0,
            primary_category: default_primary_category(),
            secondary_category: default_secondary_category(),
            catalog_path: default_catalog_path(),
            categories: CategoryVocabulary::default(),
            addable_exclude: default_addable_exclude(),
            week_start: default_week_start(),
        }
    }
}

impl MenuConfig {
    pub fn meals_per_day(&self) -> menuplan_shared::Result<MealsPerDay> {
        MealsPerDay::try_from(self.meals_per_day)
    }

    pub fn ceiling(&self) -> CalorieCeiling {
        CalorieCeiling::new(self.calorie_ceiling)
    }

    pub fn skeleton(&self) -> Skeleton {
        Skeleton::new(&self.primary_category, &self.secondary_category)
    }

    /// Vocabulary offered when adding a slot.
    pub fn addable(&self) -> CategoryVocabulary {
        self.categories.without(&self.addable_exclude)
    }
}

fn default_meals_per_day() -> u8 {
    3
}

fn default_primary_category() -> String {
    "plat".to_string()
}

fn default_secondary_category() -> String {
    "dessert".to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("assets/data/recipes.json")
}

fn default_addable_exclude() -> Vec<String> {
    vec!["other".to_string()]
}

fn default_week_start() -> u8 {
    1
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MENUPLAN__MENU__CALORIE_CEILING, etc.)
    /// 2. Config file specified by path, else CONFIG_PATH, else config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("menu.meals_per_day", 3)?
            .set_default("menu.calorie_ceiling", 0)?
            .set_default("logging.level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MENUPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let menu = &self.menu;

        if menu.meals_per_day().is_err() {
            return Err(format!(
                "meals_per_day must be between 1 and 5, got {}",
                menu.meals_per_day
            ));
        }
        if menu.week_start > 6 {
            return Err(format!(
                "week_start must be between 0 (Sunday) and 6 (Saturday), got {}",
                menu.week_start
            ));
        }

        for (name, value) in [
            ("primary_category", &menu.primary_category),
            ("secondary_category", &menu.secondary_category),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{name} must not be blank"));
            }
            if !menu.categories.contains(value) {
                return Err(format!("{name} '{value}' is not in menu.categories"));
            }
        }

        if menu.categories.is_empty() {
            return Err("menu.categories must list at least one category".to_string());
        }

        Ok(())
    }
}
