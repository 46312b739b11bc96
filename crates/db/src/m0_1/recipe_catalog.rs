use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::RecipeCatalog;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeCatalog::Table)
        .col(
            ColumnDef::new(RecipeCatalog::Id)
                .integer()
                .not_null()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(RecipeCatalog::Name).string().not_null())
        .col(ColumnDef::new(RecipeCatalog::Tags).text().not_null())
        .col(ColumnDef::new(RecipeCatalog::Instructions).text().not_null())
        .col(
            ColumnDef::new(RecipeCatalog::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(RecipeCatalog::UpdatedAt).big_integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RecipeCatalog::Table).to_owned()
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
