use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use validator::Validate;
use weekplate_db::table::RecipeCatalog;
use weekplate_shared::recipe::{Recipe, RecipeDraft};

use crate::repository::{delete_ingredients, insert_ingredients};

impl super::Command {
    /// Replaces every field of the recipe, ingredients included.
    pub async fn update(&self, id: i64, input: RecipeDraft) -> weekplate_shared::Result<Recipe> {
        input.validate()?;

        let tags = serde_json::to_string(&input.tags)?;
        let instructions = serde_json::to_string(&input.instructions)?;
        let (sql, values) = Query::update()
            .table(RecipeCatalog::Table)
            .values([
                (RecipeCatalog::Name, input.name.trim().into()),
                (RecipeCatalog::Tags, tags.into()),
                (RecipeCatalog::Instructions, instructions.into()),
                (
                    RecipeCatalog::UpdatedAt,
                    OffsetDateTime::now_utc().unix_timestamp().into(),
                ),
            ])
            .and_where(Expr::col(RecipeCatalog::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let mut tx = self.write_db.begin().await?;
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            weekplate_shared::not_found!("recipe {id}");
        }

        delete_ingredients(&mut tx, id).await?;
        insert_ingredients(&mut tx, id, &input.ingredients).await?;
        tx.commit().await?;

        Ok(Recipe::from_draft(id, crate::create::trimmed(input)))
    }
}
