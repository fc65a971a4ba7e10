use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use udb_db::table::{PasswordReset, User, UserIdentity, UserSession};

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: Option<String>,
}

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> udb_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([User::Id, User::Email, User::Password])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    email: String,
    password: Option<String>,
) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([User::Id, User::Email, User::Password, User::CreatedAt])
        .values_panic([
            id.into(),
            email.into(),
            password.into(),
            udb_shared::now_timestamp().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn update_password(
    pool: &SqlitePool,
    id: String,
    password: String,
) -> udb_shared::Result<()> {
    let statement = Query::update()
        .table(User::Table)
        .value(User::Password, password)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn find_identity(
    pool: &SqlitePool,
    provider: &str,
    subject: &str,
) -> udb_shared::Result<Option<String>> {
    let statement = Query::select()
        .column(UserIdentity::UserId)
        .from(UserIdentity::Table)
        .and_where(Expr::col(UserIdentity::Provider).eq(provider))
        .and_where(Expr::col(UserIdentity::Subject).eq(subject))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(user_id,)| user_id))
}

pub(crate) async fn create_identity(
    pool: &SqlitePool,
    provider: &str,
    subject: &str,
    user_id: &str,
) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(UserIdentity::Table)
        .columns([
            UserIdentity::Provider,
            UserIdentity::Subject,
            UserIdentity::UserId,
            UserIdentity::CreatedAt,
        ])
        .values_panic([
            provider.into(),
            subject.into(),
            user_id.into(),
            udb_shared::now_timestamp().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn create_session(
    pool: &SqlitePool,
    access_id: &str,
    user_id: &str,
) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(UserSession::Table)
        .columns([
            UserSession::AccessId,
            UserSession::UserId,
            UserSession::CreatedAt,
        ])
        .values_panic([
            access_id.into(),
            user_id.into(),
            udb_shared::now_timestamp().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn is_session_active(
    pool: &SqlitePool,
    access_id: &str,
    user_id: &str,
) -> udb_shared::Result<bool> {
    let statement = Query::select()
        .column(UserSession::AccessId)
        .from(UserSession::Table)
        .and_where(Expr::col(UserSession::AccessId).eq(access_id))
        .and_where(Expr::col(UserSession::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn delete_session(pool: &SqlitePool, access_id: &str) -> udb_shared::Result<()> {
    let statement = Query::delete()
        .from_table(UserSession::Table)
        .and_where(Expr::col(UserSession::AccessId).eq(access_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete_user_sessions(
    pool: &SqlitePool,
    user_id: &str,
) -> udb_shared::Result<()> {
    let statement = Query::delete()
        .from_table(UserSession::Table)
        .and_where(Expr::col(UserSession::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

#[derive(FromRow)]
pub struct ResetRow {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub expire_at: i64,
    pub completed: bool,
}

pub(crate) async fn create_reset(pool: &SqlitePool, row: &ResetRow) -> udb_shared::Result<()> {
    let statement = Query::insert()
        .into_table(PasswordReset::Table)
        .columns([
            PasswordReset::Id,
            PasswordReset::UserId,
            PasswordReset::Email,
            PasswordReset::ExpireAt,
            PasswordReset::Completed,
            PasswordReset::CreatedAt,
        ])
        .values_panic([
            row.id.to_owned().into(),
            row.user_id.to_owned().into(),
            row.email.to_owned().into(),
            row.expire_at.into(),
            row.completed.into(),
            udb_shared::now_timestamp().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn find_reset(pool: &SqlitePool, id: &str) -> udb_shared::Result<Option<ResetRow>> {
    let statement = Query::select()
        .columns([
            PasswordReset::Id,
            PasswordReset::UserId,
            PasswordReset::Email,
            PasswordReset::ExpireAt,
            PasswordReset::Completed,
        ])
        .from(PasswordReset::Table)
        .and_where(Expr::col(PasswordReset::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ResetRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn complete_reset(pool: &SqlitePool, id: &str) -> udb_shared::Result<()> {
    let statement = Query::update()
        .table(PasswordReset::Table)
        .value(PasswordReset::Completed, true)
        .and_where(Expr::col(PasswordReset::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
