use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::PasswordReset;

pub struct Operation;

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(PasswordReset::Table)
        .col(
            ColumnDef::new(PasswordReset::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PasswordReset::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PasswordReset::Email).string().not_null())
        .col(
            ColumnDef::new(PasswordReset::ExpireAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(PasswordReset::Completed)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(PasswordReset::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table_statement() -> TableDropStatement {
    Table::drop().table(PasswordReset::Table).to_owned()
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
