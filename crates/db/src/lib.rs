use sqlx_migrator::{Info, Migrator};

mod m0001;
mod m0002;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::<sqlx::Sqlite>::default();
    migrator.add_migrations(vec![Box::new(m0001::M0001), Box::new(m0002::M0002)])?;

    Ok(migrator)
}
