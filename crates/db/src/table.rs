use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Events {
    Table,
    Id,
    Title,
    Date,
    Location,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum EventAttendance {
    Table,
    Id,
    EventId,
    UserEmail,
    Timestamp,
}

#[derive(Iden, Clone)]
pub enum EventFeedback {
    Table,
    Id,
    EventId,
    UserEmail,
    Rating,
    Comment,
    Timestamp,
}

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum UserIdentity {
    Table,
    Provider,
    Subject,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum UserSession {
    Table,
    AccessId,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PasswordReset {
    Table,
    Id,
    UserId,
    Email,
    ExpireAt,
    Completed,
    CreatedAt,
}
