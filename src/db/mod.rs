// Database module - read access to the question bank

use async_trait::async_trait;
use color_eyre::{eyre::ensure, Result};
use sqlx::postgres::PgPoolOptions;

use crate::models::{Metadata, Question};

pub mod models;

mod metadata;
mod migrations;
mod question;

/// Read operations the handlers need from the question store.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Distinct non-null units and years, each sorted.
    async fn metadata(&self) -> Result<Metadata>;

    async fn count_questions(&self, unit: &str, year: &str) -> Result<i64>;

    /// Questions matching `(unit, year)` ordered by `question_id` descending,
    /// joined with their context.
    async fn fetch_questions(
        &self,
        unit: &str,
        year: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>>;

    async fn get_question(&self, question_id: &str) -> Result<Option<Question>>;
}

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: sqlx::PgPool,
}

impl Db {
    pub async fn new(url: &str, max_connections: u32, run_migrations: bool) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        ensure!(one == 1, "connection check failed");

        if run_migrations {
            migrations::run(&pool).await?;
        }

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }

    /// Whether a bundled migration has run. Only the database tests use this.
    #[doc(hidden)]
    pub async fn migration_applied(&self, version: &str) -> Result<bool> {
        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE version = $1)",
        )
        .bind(version)
        .fetch_one(&self.pool)
        .await?;

        Ok(applied)
    }

    /// Raw pool for seeding fixtures in the database tests. The app reads
    /// only through [`QuestionBank`].
    #[doc(hidden)]
    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}
