use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Events;

pub struct Operation;

fn create_events_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Events::Table)
        .col(
            ColumnDef::new(Events::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Events::Title).string().not_null())
        .col(
            ColumnDef::new(Events::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(Events::Location).string().not_null())
        .col(ColumnDef::new(Events::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_events_table_statement() -> TableDropStatement {
    Table::drop().table(Events::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_events_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_events_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
