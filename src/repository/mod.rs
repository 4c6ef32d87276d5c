//! Repository layer for the in-memory store

pub mod books;

use crate::models::Book;

/// Main repository struct holding every store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository over the given initial books
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::with_books(books),
        }
    }
}
