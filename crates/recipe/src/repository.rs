use std::collections::HashMap;

use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, prelude::FromRow};
use time::OffsetDateTime;
use weekplate_db::table::{RecipeCatalog, RecipeIngredient};
use weekplate_shared::recipe::{
    Ingredient, IngredientCategory, IngredientUnit, MealTime, Recipe, RecipeDraft,
};

#[derive(FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    tags: sqlx::types::Json<Vec<MealTime>>,
    instructions: sqlx::types::Json<Vec<String>>,
}

#[derive(FromRow)]
struct IngredientRow {
    recipe_id: i64,
    name: String,
    quantity: f64,
    unit: sqlx::types::Text<IngredientUnit>,
    category: Option<sqlx::types::Text<IngredientCategory>>,
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Self {
            name: row.name,
            quantity: row.quantity,
            unit: row.unit.0,
            category: row.category.map(|c| c.0),
        }
    }
}

/// Loads recipes with their ingredients in stored order. `None` loads the
/// whole catalog.
pub async fn fetch_recipes(
    conn: &mut SqliteConnection,
    ids: Option<&[i64]>,
) -> anyhow::Result<Vec<Recipe>> {
    let mut statement = Query::select()
        .columns([
            RecipeCatalog::Id,
            RecipeCatalog::Name,
            RecipeCatalog::Tags,
            RecipeCatalog::Instructions,
        ])
        .from(RecipeCatalog::Table)
        .order_by(RecipeCatalog::Id, Order::Asc)
        .to_owned();

    if let Some(ids) = ids {
        statement.and_where(Expr::col(RecipeCatalog::Id).is_in(ids.iter().copied()));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?;

    if rows.is_empty() {
        return Ok(vec![]);
    }

    let mut statement = Query::select()
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::Name,
            RecipeIngredient::Quantity,
            RecipeIngredient::Unit,
            RecipeIngredient::Category,
        ])
        .from(RecipeIngredient::Table)
        .order_by(RecipeIngredient::RecipeId, Order::Asc)
        .order_by(RecipeIngredient::Position, Order::Asc)
        .to_owned();

    if let Some(ids) = ids {
        statement.and_where(Expr::col(RecipeIngredient::RecipeId).is_in(ids.iter().copied()));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let ingredient_rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?;

    let mut ingredients: HashMap<i64, Vec<Ingredient>> = HashMap::new();
    for row in ingredient_rows {
        ingredients.entry(row.recipe_id).or_default().push(row.into());
    }

    Ok(rows
        .into_iter()
        .map(|row| Recipe {
            ingredients: ingredients.remove(&row.id).unwrap_or_default(),
            id: row.id,
            name: row.name,
            tags: row.tags.0,
            instructions: row.instructions.0,
        })
        .collect())
}

pub async fn recipe_exists(conn: &mut SqliteConnection, id: i64) -> anyhow::Result<bool> {
    let (sql, values) = Query::select()
        .column(RecipeCatalog::Id)
        .from(RecipeCatalog::Table)
        .and_where(Expr::col(RecipeCatalog::Id).eq(id))
        .build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_with(&sql, values).fetch_optional(conn).await?;

    Ok(row.is_some())
}

/// Inserts a recipe row and its ingredients. A given `id` is kept as is,
/// otherwise SQLite allocates one.
pub async fn insert_recipe(
    conn: &mut SqliteConnection,
    id: Option<i64>,
    draft: &RecipeDraft,
) -> anyhow::Result<i64> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let tags = serde_json::to_string(&draft.tags)?;
    let instructions = serde_json::to_string(&draft.instructions)?;

    let mut statement = Query::insert()
        .into_table(RecipeCatalog::Table)
        .to_owned();

    match id {
        Some(id) => statement
            .columns([
                RecipeCatalog::Id,
                RecipeCatalog::Name,
                RecipeCatalog::Tags,
                RecipeCatalog::Instructions,
                RecipeCatalog::CreatedAt,
            ])
            .values_panic([
                id.into(),
                draft.name.trim().into(),
                tags.into(),
                instructions.into(),
                now.into(),
            ]),
        None => statement
            .columns([
                RecipeCatalog::Name,
                RecipeCatalog::Tags,
                RecipeCatalog::Instructions,
                RecipeCatalog::CreatedAt,
            ])
            .values_panic([
                draft.name.trim().into(),
                tags.into(),
                instructions.into(),
                now.into(),
            ]),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;
    let id = id.unwrap_or_else(|| result.last_insert_rowid());

    insert_ingredients(conn, id, &draft.ingredients).await?;

    Ok(id)
}

pub(crate) async fn insert_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    ingredients: &[Ingredient],
) -> anyhow::Result<()> {
    if ingredients.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(RecipeIngredient::Table)
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::Position,
            RecipeIngredient::Name,
            RecipeIngredient::Quantity,
            RecipeIngredient::Unit,
            RecipeIngredient::Category,
        ])
        .to_owned();

    for (position, ingredient) in ingredients.iter().enumerate() {
        statement.values_panic([
            recipe_id.into(),
            (position as i64).into(),
            ingredient.name.trim().into(),
            ingredient.quantity.into(),
            ingredient.unit.to_string().into(),
            ingredient.category.map(|c| c.to_string()).into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn delete_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i64,
) -> anyhow::Result<()> {
    let (sql, values) = Query::delete()
        .from_table(RecipeIngredient::Table)
        .and_where(Expr::col(RecipeIngredient::RecipeId).eq(recipe_id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

/// Removes every recipe and ingredient.
pub async fn purge(conn: &mut SqliteConnection) -> anyhow::Result<()> {
    let (sql, values) = Query::delete()
        .from_table(RecipeIngredient::Table)
        .build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let (sql, values) = Query::delete()
        .from_table(RecipeCatalog::Table)
        .build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
