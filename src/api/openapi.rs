//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "1.0.0",
        description = "In-memory book inventory REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::delete_book,
        // Inventory
        books::checkout_book,
        books::return_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management"),
        (name = "inventory", description = "Checkout and return of copies")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
