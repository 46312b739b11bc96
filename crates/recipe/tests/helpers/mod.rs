#![allow(dead_code)]

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};
use weekplate_shared::State;
use weekplate_shared::recipe::{
    Ingredient, IngredientCategory, IngredientUnit, MealTime, RecipeDraft,
};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    weekplate_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State {
        read_db: pool.clone(),
        write_db: pool,
    })
}

pub fn ingredient(name: &str, quantity: f64, unit: IngredientUnit) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        quantity,
        unit,
        category: Some(IngredientCategory::Grocery),
    }
}

pub fn draft(name: &str, tags: Vec<MealTime>) -> RecipeDraft {
    RecipeDraft {
        name: name.to_owned(),
        tags,
        ingredients: vec![ingredient("Salt", 5.0, IngredientUnit::G)],
        instructions: vec!["Cook".to_owned()],
    }
}
