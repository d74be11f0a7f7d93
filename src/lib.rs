rust_i18n::i18n!("locales", fallback = "en");

pub mod db;
pub mod extractors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod rejections;
pub mod selection;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn db::QuestionBank>,
}

impl AppState {
    pub fn new(db: impl db::QuestionBank + 'static) -> Self {
        Self { db: Arc::new(db) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::api::routes())
        .merge(handlers::browse::routes())
        .merge(handlers::question::routes())
        .nest("/static", statics::routes())
        .fallback(rejections::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
