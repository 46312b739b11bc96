use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{RecipeCatalog, WeeklyPlanSlot};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(WeeklyPlanSlot::Table)
        .col(
            ColumnDef::new(WeeklyPlanSlot::Day)
                .string()
                .not_null()
                .string_len(10)
                .primary_key(),
        )
        .col(ColumnDef::new(WeeklyPlanSlot::MiddayId).integer().null())
        .col(ColumnDef::new(WeeklyPlanSlot::EveningId).integer().null())
        .col(
            ColumnDef::new(WeeklyPlanSlot::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .from(WeeklyPlanSlot::Table, WeeklyPlanSlot::MiddayId)
                .to(RecipeCatalog::Table, RecipeCatalog::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .foreign_key(
            ForeignKey::create()
                .from(WeeklyPlanSlot::Table, WeeklyPlanSlot::EveningId)
                .to(RecipeCatalog::Table, RecipeCatalog::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(WeeklyPlanSlot::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
