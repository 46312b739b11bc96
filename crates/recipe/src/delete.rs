use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use weekplate_db::table::{RecipeCatalog, WeeklyPlanSlot};

use crate::repository::delete_ingredients;

impl super::Command {
    /// Deletes the recipe and empties every plan slot that pointed at it.
    pub async fn delete(&self, id: i64) -> weekplate_shared::Result<()> {
        let mut tx = self.write_db.begin().await?;

        for column in [WeeklyPlanSlot::MiddayId, WeeklyPlanSlot::EveningId] {
            let (sql, values) = Query::update()
                .table(WeeklyPlanSlot::Table)
                .values([(column.clone(), Option::<i64>::None.into())])
                .and_where(Expr::col(column).eq(id))
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        delete_ingredients(&mut tx, id).await?;

        let (sql, values) = Query::delete()
            .from_table(RecipeCatalog::Table)
            .and_where(Expr::col(RecipeCatalog::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            weekplate_shared::not_found!("recipe {id}");
        }

        tx.commit().await?;

        Ok(())
    }
}
