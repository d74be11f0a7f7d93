use color_eyre::Result;

use super::Db;

impl Db {
    pub(super) async fn distinct_units(&self) -> Result<Vec<String>> {
        let units: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT unit::TEXT FROM questions WHERE unit IS NOT NULL ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(units)
    }

    pub(super) async fn distinct_years(&self) -> Result<Vec<String>> {
        let years: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT year::TEXT FROM questions WHERE year IS NOT NULL ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(years)
    }
}
