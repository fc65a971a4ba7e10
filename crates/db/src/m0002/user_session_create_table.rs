use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserSession;

pub struct Operation;

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(UserSession::Table)
        .col(
            ColumnDef::new(UserSession::AccessId)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(UserSession::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(UserSession::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table_statement() -> TableDropStatement {
    Table::drop().table(UserSession::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
