mod create;
mod delete;
mod repository;
mod update;

use std::ops::Deref;

use weekplate_shared::recipe::{Recipe, RecipeFilter};

pub use repository::{fetch_recipes, insert_recipe, purge, recipe_exists};

#[derive(Clone)]
pub struct Command(pub weekplate_shared::State);

impl Deref for Command {
    type Target = weekplate_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: weekplate_shared::State) -> Self {
        Self(state)
    }

    /// Every recipe with its ingredients, oldest first.
    pub async fn list(&self) -> weekplate_shared::Result<Vec<Recipe>> {
        let mut conn = self.read_db.acquire().await?;

        Ok(fetch_recipes(&mut conn, None).await?)
    }

    /// Recipes offered for a slot: tagged for it and whose name contains the
    /// query, oldest first.
    pub async fn search(&self, filter: &RecipeFilter) -> weekplate_shared::Result<Vec<Recipe>> {
        let recipes = self.list().await?;

        Ok(recipes.into_iter().filter(|r| filter.matches(r)).collect())
    }

    pub async fn find(&self, id: i64) -> weekplate_shared::Result<Option<Recipe>> {
        let mut conn = self.read_db.acquire().await?;
        let recipes = fetch_recipes(&mut conn, Some(&[id])).await?;

        Ok(recipes.into_iter().next())
    }
}
