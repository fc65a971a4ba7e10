use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserIdentity;

pub struct Operation;

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(UserIdentity::Table)
        .col(
            ColumnDef::new(UserIdentity::Provider)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(ColumnDef::new(UserIdentity::Subject).string().not_null())
        .col(
            ColumnDef::new(UserIdentity::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(UserIdentity::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(UserIdentity::Provider)
                .col(UserIdentity::Subject),
        )
        .to_owned()
}

fn drop_table_statement() -> TableDropStatement {
    Table::drop().table(UserIdentity::Table).to_owned()
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
