use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};
use time_tz::{ToTimezone, timezones};

/// Calendar date layout used by every stored event (`YYYY-MM-DD`).
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub fn parse_date(value: &str) -> Option<Date> {
    if value.len() != 10 {
        return None;
    }

    Date::parse(value, DATE_FORMAT).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "UTC";

pub fn is_known_timezone(tz: &str) -> bool {
    tz == DEFAULT_TIMEZONE || timezones::get_by_name(tz).is_some()
}

/// Calendar date of `now` in the IANA timezone `tz`; unknown names fall back
/// to UTC.
pub fn local_date(now: OffsetDateTime, tz: &str) -> Date {
    match timezones::get_by_name(tz) {
        Some(tz) => now.to_timezone(tz).date(),
        None => now.date(),
    }
}

/// Today as seen by a user in `tz`.
pub fn today(tz: &str) -> Date {
    local_date(OffsetDateTime::now_utc(), tz)
}

pub fn now_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
