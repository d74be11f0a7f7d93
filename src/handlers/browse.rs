use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use color_eyre::Result;
use maud::Markup;
use rust_i18n::t;

use crate::{
    db::QuestionBank,
    extractors::{IsHtmx, Locale},
    filter::{BrowseQuery, FilterState},
    names,
    pagination::{self, PageParams, QuestionPage},
    rejections::{AppError, ResultExt},
    views,
    views::browse as browse_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(home))
        .route(names::BROWSE_URL, get(browse))
}

async fn home(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Query(query): Query<BrowseQuery>,
) -> Result<Markup, AppError> {
    let filter = FilterState::from_query(&query);
    full_page(&state, is_htmx, &filter, &locale).await
}

/// Results fragment for htmx swaps, the whole page otherwise so pushed URLs
/// survive a reload.
async fn browse(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Query(query): Query<BrowseQuery>,
) -> Result<Markup, AppError> {
    let filter = FilterState::from_query(&query);
    if !is_htmx {
        return full_page(&state, false, &filter, &locale).await;
    }

    let page = load_page(state.db.as_ref(), &filter)
        .await
        .reject("could not load questions")?;

    Ok(browse_views::results_fragment(&filter, &page, &locale))
}

async fn full_page(
    state: &AppState,
    is_htmx: bool,
    filter: &FilterState,
    locale: &str,
) -> Result<Markup, AppError> {
    let (metadata, page) = tokio::try_join!(
        state.db.metadata(),
        load_page(state.db.as_ref(), filter),
    )
    .reject("could not load browse page")?;

    let title = t!("app.title", locale = locale);
    Ok(views::render(
        is_htmx,
        &title,
        browse_views::browse_page(&metadata, filter, &page, locale),
        locale,
    ))
}

async fn load_page(db: &dyn QuestionBank, filter: &FilterState) -> Result<QuestionPage> {
    match filter.request(names::DEFAULT_LIMIT) {
        Some(request) => {
            tracing::debug!(seq = request.seq, page = request.params.page, "loading results");
            pagination::fetch_page(
                db,
                Some(request.unit.as_str()),
                Some(request.year.as_str()),
                request.params,
            )
            .await
        }
        None => Ok(QuestionPage::empty(PageParams::new(
            filter.page(),
            names::DEFAULT_LIMIT,
        ))),
    }
}
