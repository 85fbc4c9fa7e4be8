//! Category endpoints

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::BookCategory;

/// Category list response
#[derive(Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub message: String,
    /// Category names keyed by id
    #[schema(value_type = Object, example = json!({"1": "Mythology", "2": "Math"}))]
    pub data: BTreeMap<i32, &'static str>,
}

/// List the fixed book categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category list", body = CategoryListResponse)
    )
)]
pub async fn list_categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        message: "Category List".to_string(),
        data: BookCategory::map(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::api::test_support::{app, body_json};
    use crate::repository::books::MockBooksRepository;

    #[tokio::test]
    async fn lists_the_four_categories_without_touching_storage() {
        let response = app(MockBooksRepository::new())
            .oneshot(Request::get("/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "Category List",
                "data": {"1": "Mythology", "2": "Math", "3": "Historical", "4": "Mystery"}
            })
        );
    }
}
