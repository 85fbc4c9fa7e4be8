//! Book API endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::Uri,
    Form, Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::{Book, BookInput, UpdateBookForm},
    AppState,
};

/// Book list response
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub message: String,
    pub data: Vec<Book>,
}

/// Book detail response
#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub message: String,
    pub data: Book,
}

/// Outcome of a write operation
#[derive(Serialize, ToSchema)]
pub struct ActionResponse {
    pub message: String,
    pub success: bool,
}

impl ActionResponse {
    fn new(message: &str, success: bool) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            success,
        })
    }
}

/// Path ids arrive as text; only integers can match a row.
fn parse_id(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", raw)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = BookListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list().await?;
    Ok(Json(BookListResponse {
        message: "Books List".to_string(),
        data: books,
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/show/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn show_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookDetailResponse>> {
    let id = parse_id(&id)?;
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(BookDetailResponse {
        message: "Book Detail".to_string(),
        data: book,
    }))
}

/// Store a new book
///
/// The body is JSON; a malformed body is stored as an empty book.
#[utoipa::path(
    post,
    path = "/books/store",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book stored", body = ActionResponse),
        (status = 500, description = "Book not stored", body = ErrorResponse)
    )
)]
pub async fn store_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ActionResponse>> {
    let data = BookInput::from_json_lenient(&body);
    let id = state.services.books.create(&data).await?;
    Ok(ActionResponse::new("Book Stored", id > 0))
}

/// Update a book
///
/// Fields come from a form-encoded body, falling back to the query string.
/// Missing fields are stored as an empty name and category 0.
#[utoipa::path(
    post,
    path = "/books/update/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body(content = UpdateBookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Book updated", body = ActionResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
    form: Option<Form<UpdateBookForm>>,
) -> AppResult<Json<ActionResponse>> {
    let id = parse_id(&id)?;
    let query = Query::<UpdateBookForm>::try_from_uri(&uri)
        .map(|Query(query)| query)
        .unwrap_or_default();
    let form = form.map(|Form(form)| form).unwrap_or_default();
    state.services.books.update(id, &form.or(query).into()).await?;
    Ok(ActionResponse::new("Book Updated", true))
}

/// Delete a book
#[utoipa::path(
    post,
    path = "/books/delete/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = ActionResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ActionResponse>> {
    let id = parse_id(&id)?;
    state.services.books.delete(id).await?;
    Ok(ActionResponse::new("Book Deleted", true))
}
