use async_trait::async_trait;
use color_eyre::Result;

use super::models::QuestionRow;
use super::{Db, QuestionBank};
use crate::models::{Metadata, Question};

#[async_trait]
impl QuestionBank for Db {
    async fn metadata(&self) -> Result<Metadata> {
        let (units, years) = tokio::try_join!(self.distinct_units(), self.distinct_years())?;
        Ok(Metadata { units, years })
    }

    async fn count_questions(&self, unit: &str, year: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM questions WHERE unit::TEXT = $1 AND year::TEXT = $2",
        )
        .bind(unit)
        .bind(year)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn fetch_questions(
        &self,
        unit: &str,
        year: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT
                q.question_id::TEXT AS question_id,
                q.unit::TEXT AS unit,
                q.year::TEXT AS year,
                q.question_type,
                q.question,
                q.options,
                q.correct_answer,
                q.context_id::TEXT AS context_id,
                c.context_type,
                c.content AS context_content
            FROM questions q
            LEFT JOIN contexts c ON c.context_id = q.context_id
            WHERE q.unit::TEXT = $1 AND q.year::TEXT = $2
            ORDER BY q.question_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(unit)
        .bind(year)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn get_question(&self, question_id: &str) -> Result<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT
                q.question_id::TEXT AS question_id,
                q.unit::TEXT AS unit,
                q.year::TEXT AS year,
                q.question_type,
                q.question,
                q.options,
                q.correct_answer,
                q.context_id::TEXT AS context_id,
                c.context_type,
                c.content AS context_content
            FROM questions q
            LEFT JOIN contexts c ON c.context_id = q.context_id
            WHERE q.question_id::TEXT = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }
}
