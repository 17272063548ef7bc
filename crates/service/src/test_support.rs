#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect to the test database, running migrations on first use. Returns
/// `None` when no database is reachable so DB-backed tests can skip instead
/// of failing.
pub async fn get_db() -> Option<DatabaseConnection> {
    let mut cfg = DatabaseConfig::from_file().unwrap_or_else(|_| DatabaseConfig::from_env());
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    cfg.connect_timeout = std::time::Duration::from_secs(5);

    let db = match connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };

    // The pool connects lazily, so a migration run doubles as the liveness
    // probe for the database.
    let ok = MIGRATED
        .get_or_init(|| async {
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !*ok {
        return None;
    }
    Some(db)
}
