use anyhow::Context;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

const SQLITE_PRAGMAS: [&str; 4] = [
    "PRAGMA journal_mode=WAL",
    "PRAGMA synchronous=NORMAL",
    "PRAGMA cache_size=-64000",
    "PRAGMA foreign_keys=ON",
];

pub async fn connect_and_migrate(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let db = connect(&config.database_url, config.max_connections).await?;
    migration::Migrator::up(&db, None).await.context("running migrations")?;
    Ok(db)
}

/// Opens a pool without running migrations. In-memory SQLite needs
/// `max_connections == 1`, every pooled connection gets its own database.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.max_connections(max_connections);

    let db = Database::connect(options)
        .await
        .with_context(|| format!("connecting to {database_url}"))?;

    if db.get_database_backend() == DbBackend::Sqlite {
        for pragma in SQLITE_PRAGMAS {
            db.execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string()))
                .await
                .with_context(|| format!("applying {pragma}"))?;
        }
    }

    Ok(db)
}

#[cfg(test)]
pub(crate) async fn test_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:", 1).await.expect("in-memory sqlite");
    migration::Migrator::up(&db, None).await.expect("migrations");
    db
}
