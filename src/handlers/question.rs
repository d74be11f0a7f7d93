use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::Locale,
    rejections::{AppError, ResultExt},
    selection::Selections,
    views::question as question_views,
    AppState,
};

#[derive(Deserialize)]
struct SelectOptionQuery {
    option: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/question/{question_id}/select", get(select_option))
}

/// Re-render one question's options with `option` selected. Nothing is
/// stored: the returned markup is the selection.
async fn select_option(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(question_id): Path<String>,
    Query(query): Query<SelectOptionQuery>,
) -> Result<Markup, AppError> {
    let index = query
        .option
        .as_deref()
        .ok_or(AppError::Input("missing option"))?
        .trim()
        .parse::<usize>()
        .reject_input("failed to parse option index")?;

    let question = state
        .db
        .get_question(&question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    if index == 0 || index > question.options.len() {
        return Err(AppError::Input("option index out of range"));
    }

    let mut selections = Selections::default();
    selections.select(&question.question_id, index);

    Ok(question_views::options(&question, &selections, &locale))
}
