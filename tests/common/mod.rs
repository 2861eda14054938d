#![allow(dead_code)]

use client_resource::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database living in a temporary directory, migrated on creation and
/// removed when dropped.
pub struct TestDb {
    pool: DbPool,
    dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("temp path is not utf-8").to_string();

        let pool = establish_connection_pool(&url).expect("failed to build pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn path_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}
