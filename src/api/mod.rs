//! API handlers and router for the Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
///
/// The configured path prefix (if any) is prepended to every API route.
/// Swagger UI stays at the root regardless of the prefix.
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        .route("/book/add", post(books::add_book))
        .route("/books/update/:id", put(books::update_book))
        .route("/books/delete/:id", delete(books::delete_book));

    let prefix = state.config.http.path_prefix.clone();
    let routes = routes.with_state(state);

    let app = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(&prefix, routes)
    };

    app.merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
