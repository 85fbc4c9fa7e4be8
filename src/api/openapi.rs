//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{self, books, categories, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "0.1.0",
        description = "CRUD API for a books catalog"
    ),
    paths(
        api::index,
        // Health
        health::health_check,
        health::readiness_check,
        // Categories
        categories::list_categories,
        // Books
        books::list_books,
        books::show_book,
        books::store_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            api::MessageResponse,
            health::HealthResponse,
            categories::CategoryListResponse,
            crate::models::book::Book,
            crate::models::book::BookInput,
            crate::models::book::UpdateBookForm,
            books::BookListResponse,
            books::BookDetailResponse,
            books::ActionResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categories", description = "Fixed book categories"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
