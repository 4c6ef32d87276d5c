//! API handlers and routing for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    routing::{get, patch},
    Router,
};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::ServerConfig, error::AppError, models::book::IdQuery, AppState};

/// JSON body extractor.
///
/// The body is decoded whatever the `Content-Type` header says; undecodable
/// bodies are answered with an `AppError`.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(AppJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }
}

/// Reads `?id=` from the query string, keeping the first value when repeated
#[async_trait]
impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)?;
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);

        Ok(IdQuery { id })
    }
}

/// Bind the listening socket; `host` may be an IP address or a hostname
pub async fn bind_listener(server: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port)).await
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book).delete(books::delete_book))
        // Inventory
        .route("/checkout", patch(books::checkout_book))
        .route("/return", patch(books::return_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
