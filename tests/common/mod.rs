#![allow(dead_code)]

use std::{
    collections::BTreeSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use color_eyre::{eyre::eyre, Result};
use http_body_util::BodyExt;
use quizbank::{
    db::QuestionBank,
    models::{ContextContent, Metadata, Question, QuestionBody, QuestionType},
    router, AppState,
};
use tower::ServiceExt;

/// In-memory question store with the same filtering and ordering rules as
/// the Postgres queries.
#[derive(Clone, Default)]
pub struct MemoryBank {
    questions: Vec<Question>,
    failing: bool,
    queries: Arc<AtomicUsize>,
}

impl MemoryBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Shared counter of storage calls, readable after the bank moved into a router.
    pub fn query_counter(&self) -> Arc<AtomicUsize> {
        self.queries.clone()
    }

    fn check(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(eyre!("connection refused"));
        }
        Ok(())
    }

    fn matching(&self, unit: &str, year: &str) -> Vec<&Question> {
        let mut matching: Vec<_> = self
            .questions
            .iter()
            .filter(|q| q.unit.as_deref() == Some(unit) && q.year.as_deref() == Some(year))
            .collect();
        matching.sort_by(|a, b| b.question_id.cmp(&a.question_id));
        matching
    }
}

#[async_trait]
impl QuestionBank for MemoryBank {
    async fn metadata(&self) -> Result<Metadata> {
        self.check()?;
        let units: BTreeSet<_> = self.questions.iter().filter_map(|q| q.unit.clone()).collect();
        let years: BTreeSet<_> = self.questions.iter().filter_map(|q| q.year.clone()).collect();
        Ok(Metadata {
            units: units.into_iter().collect(),
            years: years.into_iter().collect(),
        })
    }

    async fn count_questions(&self, unit: &str, year: &str) -> Result<i64> {
        self.check()?;
        Ok(self.matching(unit, year).len() as i64)
    }

    async fn fetch_questions(
        &self,
        unit: &str,
        year: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>> {
        self.check()?;
        Ok(self
            .matching(unit, year)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_question(&self, question_id: &str) -> Result<Option<Question>> {
        self.check()?;
        Ok(self
            .questions
            .iter()
            .find(|q| q.question_id == question_id)
            .cloned())
    }
}

pub fn plain_question(id: &str, unit: &str, year: &str) -> Question {
    Question {
        question_id: id.to_string(),
        unit: Some(unit.to_string()),
        year: Some(year.to_string()),
        question_type: QuestionType::Plain,
        question: QuestionBody {
            prompt: format!("Prompt for {id}"),
            ..Default::default()
        },
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        correct_answer: Some(vec!["2".to_string()]),
        context_id: None,
        context_type: None,
        context_content: ContextContent::None,
    }
}

/// 30 questions in ("Unit 1", "2020") plus a handful elsewhere.
pub fn sample_bank() -> MemoryBank {
    let mut questions: Vec<_> = (1..=30)
        .map(|i| plain_question(&format!("Q-{i:03}"), "Unit 1", "2020"))
        .collect();
    questions.extend((1..=3).map(|i| plain_question(&format!("R-{i:03}"), "Unit 2", "2021")));
    questions.push(Question {
        year: None,
        ..plain_question("S-001", "Unit 3", "")
    });
    MemoryBank::new(questions)
}

pub async fn get(bank: MemoryBank, uri: &str, htmx: bool) -> (StatusCode, String) {
    let app = router(AppState::new(bank));
    let mut req = Request::builder().uri(uri);
    if htmx {
        req = req.header("HX-Request", "true");
    }
    let resp = app
        .oneshot(req.body(Body::empty()).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("body should be utf-8"))
}

pub async fn get_json(bank: MemoryBank, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(bank, uri, false).await;
    let json = serde_json::from_str(&body).expect("body should be json");
    (status, json)
}
