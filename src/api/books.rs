//! Book inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, IdQuery},
};

use super::AppJson;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in store order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list_books().await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(&id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(book): AppJson<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Remaining books", body = Vec<Book>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let remaining = state.services.books.delete_book(&id).await?;
    Ok(Json(remaining))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "inventory",
    params(IdQuery),
    responses(
        (status = 200, description = "Book with decremented quantity", body = Book),
        (status = 400, description = "Missing id, unknown book or no copy available", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    query: IdQuery,
) -> AppResult<Json<Book>> {
    let book = state.services.books.checkout_book(query.id.as_deref()).await?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "inventory",
    params(IdQuery),
    responses(
        (status = 200, description = "Book with incremented quantity", body = Book),
        (status = 400, description = "Missing id or unknown book", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    query: IdQuery,
) -> AppResult<Json<Book>> {
    let book = state.services.books.return_book(query.id.as_deref()).await?;
    Ok(Json(book))
}
