//! API handlers for the Books REST endpoints

pub mod books;
pub mod categories;
pub mod cors;
pub mod health;
pub mod openapi;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use crate::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Books API";

/// Response carrying only a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// API root
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/categories", get(categories::list_categories))
        .route("/books", get(books::list_books))
        .route("/books/show/:id", get(books::show_book))
        .route("/books/store", post(books::store_book))
        .route("/books/update/:id", post(books::update_book))
        .route("/books/delete/:id", post(books::delete_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors))
}
