use std::collections::HashSet;

use serde::Serialize;
use validator::Validate;
use weekplate_shared::{State, backup::Backup, recipe::Recipe};

#[derive(Debug, Serialize, PartialEq)]
pub struct ImportSummary {
    pub recipes: usize,
    pub days: usize,
}

/// Snapshot of the current catalog and plan.
pub async fn export(
    recipe_command: &weekplate_recipe::Command,
    mealplan_command: &weekplate_mealplan::Command,
) -> weekplate_shared::Result<Backup> {
    let recipes = recipe_command.list().await?;
    let plan = mealplan_command.get().await?;

    Ok(Backup::new(recipes, &plan))
}

/// Replaces the whole catalog and plan with the backup content. Recipe ids
/// are kept; slots pointing at no imported recipe are dropped.
pub async fn import(state: &State, backup: Backup) -> weekplate_shared::Result<ImportSummary> {
    if !backup.is_supported_version() {
        weekplate_shared::bail!("unsupported backup version {}", backup.version);
    }

    let mut ids = HashSet::new();
    for recipe in backup.recipes.iter() {
        recipe.to_draft().validate()?;

        if !ids.insert(recipe.id) {
            weekplate_shared::bail!("duplicate recipe id {}", recipe.id);
        }
    }

    let resolve = |recipe: &Option<Recipe>| {
        recipe
            .as_ref()
            .map(|r| r.id)
            .filter(|id| ids.contains(id))
    };

    let mut tx = state.write_db.begin().await?;

    weekplate_mealplan::purge(&mut tx).await?;
    weekplate_recipe::purge(&mut tx).await?;

    for recipe in backup.recipes.iter() {
        weekplate_recipe::insert_recipe(&mut tx, Some(recipe.id), &recipe.to_draft()).await?;
    }

    let mut days = 0;
    for (day, slots) in backup.weekly_plan.iter() {
        let midday = resolve(&slots.midday);
        let evening = resolve(&slots.evening);

        if midday.is_none() && evening.is_none() {
            continue;
        }

        weekplate_mealplan::upsert_slot(&mut tx, *day, midday, evening).await?;
        days += 1;
    }

    tx.commit().await?;

    tracing::info!(recipes = backup.recipes.len(), days, "backup imported");

    Ok(ImportSummary {
        recipes: backup.recipes.len(),
        days,
    })
}
