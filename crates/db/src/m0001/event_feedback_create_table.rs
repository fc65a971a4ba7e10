use sea_query::{
    ColumnDef, Index, IndexCreateStatement, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::EventFeedback;

pub struct Operation;

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(EventFeedback::Table)
        .col(
            ColumnDef::new(EventFeedback::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(EventFeedback::EventId).string().not_null())
        .col(
            ColumnDef::new(EventFeedback::UserEmail)
                .string()
                .not_null(),
        )
        .col(ColumnDef::new(EventFeedback::Rating).double().not_null())
        .col(
            ColumnDef::new(EventFeedback::Comment)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(EventFeedback::Timestamp)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn create_event_id_idx_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_event_feedback_event_id")
        .table(EventFeedback::Table)
        .col(EventFeedback::EventId)
        .to_owned()
}

fn drop_table_statement() -> TableDropStatement {
    Table::drop().table(EventFeedback::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(&mut *connection).await?;

        let statment = create_event_id_idx_statement().to_string(sea_query::SqliteQueryBuilder);
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
