use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use udb_db::table::{EventAttendance, EventFeedback, Events};

use crate::{AttendanceRecord, Event, FeedbackRecord};

pub(crate) async fn insert_event(
    pool: &SqlitePool,
    event: &Event,
    created_at: i64,
) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Events::Table)
        .columns([
            Events::Id,
            Events::Title,
            Events::Date,
            Events::Location,
            Events::CreatedAt,
        ])
        .values_panic([
            event.id.to_owned().into(),
            event.title.to_owned().into(),
            event.date.to_owned().into(),
            event.location.to_owned().into(),
            created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn all_events(pool: &SqlitePool) -> udb_shared::Result<Vec<Event>> {
    let statement = Query::select()
        .columns([Events::Id, Events::Title, Events::Date, Events::Location])
        .from(Events::Table)
        .order_by_expr(Expr::cust("rowid"), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Event, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn find_event(pool: &SqlitePool, id: &str) -> udb_shared::Result<Option<Event>> {
    let statement = Query::select()
        .columns([Events::Id, Events::Title, Events::Date, Events::Location])
        .from(Events::Table)
        .and_where(Expr::col(Events::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Event, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn insert_attendance(
    pool: &SqlitePool,
    record: &AttendanceRecord,
) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(EventAttendance::Table)
        .columns([
            EventAttendance::Id,
            EventAttendance::EventId,
            EventAttendance::UserEmail,
            EventAttendance::Timestamp,
        ])
        .values_panic([
            record.id.to_owned().into(),
            record.event_id.to_owned().into(),
            record.user_email.to_owned().into(),
            record.timestamp.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn attendance_by_email(
    pool: &SqlitePool,
    email: &str,
) -> udb_shared::Result<Vec<AttendanceRecord>> {
    let statement = Query::select()
        .columns([
            EventAttendance::Id,
            EventAttendance::EventId,
            EventAttendance::UserEmail,
            EventAttendance::Timestamp,
        ])
        .from(EventAttendance::Table)
        .and_where(Expr::col(EventAttendance::UserEmail).eq(email))
        .order_by_expr(Expr::cust("rowid"), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, AttendanceRecord, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn insert_feedback(
    pool: &SqlitePool,
    record: &FeedbackRecord,
) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(EventFeedback::Table)
        .columns([
            EventFeedback::Id,
            EventFeedback::EventId,
            EventFeedback::UserEmail,
            EventFeedback::Rating,
            EventFeedback::Comment,
            EventFeedback::Timestamp,
        ])
        .values_panic([
            record.id.to_owned().into(),
            record.event_id.to_owned().into(),
            record.user_email.to_owned().into(),
            record.rating.into(),
            record.comment.to_owned().into(),
            record.timestamp.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn feedback_by_event(
    pool: &SqlitePool,
    event_id: &str,
) -> udb_shared::Result<Vec<FeedbackRecord>> {
    let statement = Query::select()
        .columns([
            EventFeedback::Id,
            EventFeedback::EventId,
            EventFeedback::UserEmail,
            EventFeedback::Rating,
            EventFeedback::Comment,
            EventFeedback::Timestamp,
        ])
        .from(EventFeedback::Table)
        .and_where(Expr::col(EventFeedback::EventId).eq(event_id))
        .order_by_expr(Expr::cust("rowid"), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, FeedbackRecord, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}
