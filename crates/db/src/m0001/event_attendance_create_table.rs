use sea_query::{
    ColumnDef, Index, IndexCreateStatement, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::EventAttendance;

pub struct Operation;

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(EventAttendance::Table)
        .col(
            ColumnDef::new(EventAttendance::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(EventAttendance::EventId)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(EventAttendance::UserEmail)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(EventAttendance::Timestamp)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn create_user_email_idx_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_event_attendance_user_email")
        .table(EventAttendance::Table)
        .col(EventAttendance::UserEmail)
        .to_owned()
}

fn drop_table_statement() -> TableDropStatement {
    Table::drop().table(EventAttendance::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(&mut *connection).await?;

        let statment = create_user_email_idx_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(&mut *connection).await?;

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
