#![allow(dead_code, unused_imports)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Creates an in-memory SQLite database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Clears all tables between tests
pub async fn cleanup_db(db: &DatabaseConnection) {
    use sea_orm::ConnectionTrait;

    db.execute_unprepared("DELETE FROM users").await.ok();
}
