//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record held by the store
///
/// Every field is optional on input and falls back to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Client-assigned identifier
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Capitães da Areia")]
    pub title: String,
    #[schema(example = "Jorge Amado")]
    pub author: String,
    /// Number of copies available for checkout
    #[schema(example = 2)]
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Query string carrying a book id (`?id=...`)
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Book ID
    pub id: Option<String>,
}

/// Records loaded into the store at startup
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "Capitães da Areia", "Jorge Amado", 2),
        Book::new("2", "Dom Casmurro", "Machado de Assis", 5),
        Book::new("3", "A droga da obediência", "Pedro Bandeira", 6),
    ]
}
