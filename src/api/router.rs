use crate::api::handlers::{
    create_person, delete_person, get_person, health, list_people, update_person,
};
use crate::api::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the service router.
///
/// ```text
/// POST   /people        create (enriched)
/// GET    /people        list, filtered and paged
/// GET    /people/:id    fetch one
/// PUT    /people/:id    partial update
/// DELETE /people/:id    delete (idempotent)
/// GET    /health        liveness
/// ```
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route(
            "/people/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/health", get(health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
