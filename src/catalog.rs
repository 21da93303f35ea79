use std::path::Path;

use anyhow::{Context, Result};
use menuplan_engine::{DAYS_PER_WEEK, Week};
use menuplan_shared::recipe::Recipe;
use serde_json::Value;

/// Load the recipe catalog.
///
/// A file that is not a JSON array yields an empty catalog, and entries that
/// are not objects are skipped. Field level problems are absorbed by the
/// lenient `Recipe` deserializer.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read recipe catalog {}", path.display()))?;
    let data: Value = serde_json::from_slice(&raw)
        .with_context(|| format!("invalid JSON in recipe catalog {}", path.display()))?;

    let Value::Array(entries) = data else {
        tracing::warn!(path = %path.display(), "recipe catalog is not a JSON array, using an empty catalog");
        return Ok(Vec::new());
    };

    let total = entries.len();
    let catalog: Vec<Recipe> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if catalog.len() < total {
        tracing::warn!(
            skipped = total - catalog.len(),
            "catalog entries that are not recipe objects were skipped"
        );
    }
    if catalog.is_empty() {
        tracing::warn!(path = %path.display(), "recipe catalog is empty");
    }

    tracing::info!(recipes = catalog.len(), path = %path.display(), "recipe catalog loaded");

    Ok(catalog)
}

pub async fn load_week(path: impl AsRef<Path>) -> Result<Week> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read week {}", path.display()))?;

    serde_json::from_slice(&raw).with_context(|| format!("invalid week file {}", path.display()))
}

/// Load a previous week to regenerate from.
///
/// Anything other than exactly seven days is treated as no previous week.
pub async fn load_previous_week(path: impl AsRef<Path>) -> Result<Option<Week>> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read week {}", path.display()))?;
    let data: Value = serde_json::from_slice(&raw)
        .with_context(|| format!("invalid JSON in week {}", path.display()))?;

    match &data {
        Value::Array(days) if days.len() == DAYS_PER_WEEK => {
            let week = serde_json::from_value(data)
                .with_context(|| format!("invalid week file {}", path.display()))?;
            Ok(Some(week))
        }
        _ => {
            tracing::warn!(path = %path.display(), "previous week does not have 7 days, starting fresh");
            Ok(None)
        }
    }
}

pub async fn save_week(path: impl AsRef<Path>, week: &Week) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(week)?;

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("failed to write week {}", path.display()))?;

    tracing::debug!(path = %path.display(), "week saved");

    Ok(())
}
