use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    models::Metadata,
    names,
    pagination::{self, QuestionPage, QuestionsQuery},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::METADATA_URL, get(metadata))
        .route(names::QUESTIONS_URL, get(questions))
        .route("/api/metadata", get(metadata))
        .route("/api/questions", get(questions))
}

async fn metadata(State(state): State<AppState>) -> Result<Json<Metadata>, AppError> {
    let metadata = state
        .db
        .metadata()
        .await
        .reject_api(names::METADATA_ERROR)?;

    Ok(Json(metadata))
}

async fn questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<QuestionPage>, AppError> {
    let page = pagination::fetch_page(
        state.db.as_ref(),
        query.unit.as_deref(),
        query.year.as_deref(),
        query.params(),
    )
    .await
    .reject_api(names::QUESTIONS_ERROR)?;

    tracing::debug!(
        total = page.total,
        returned = page.questions.len(),
        "served questions page"
    );

    Ok(Json(page))
}
