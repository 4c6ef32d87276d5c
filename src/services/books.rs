//! Book inventory service

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

pub const MSG_BOOK_NOT_FOUND: &str = "Book not found.";
pub const MSG_BOOK_NOT_AVAILABLE: &str = "Book not available.";
pub const MSG_BOOK_EXISTS: &str = "Book already exists.";
pub const MSG_MISSING_ID: &str = "Missing id query parameter.";
pub const MSG_QUANTITY_OVERFLOW: &str = "Book quantity overflow.";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books in store order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Number of books currently stored
    pub async fn count_books(&self) -> usize {
        self.repository.books.count().await
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(MSG_BOOK_NOT_FOUND.to_string()))
    }

    /// Add a new book, rejecting an id that is already stored
    pub async fn create_book(&self, book: Book) -> AppResult<Book> {
        match self.repository.books.insert_unique(book).await {
            Ok(created) => {
                tracing::info!("Book created: id={} title={:?}", created.id, created.title);
                Ok(created)
            }
            Err(rejected) => {
                tracing::debug!("Book create rejected, id={} already exists", rejected.id);
                Err(AppError::Conflict(MSG_BOOK_EXISTS.to_string()))
            }
        }
    }

    /// Delete a book and return the remaining books
    pub async fn delete_book(&self, id: &str) -> AppResult<Vec<Book>> {
        let removed = self
            .repository
            .books
            .remove_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(MSG_BOOK_NOT_FOUND.to_string()))?;

        tracing::info!("Book deleted: id={}", removed.id);
        Ok(self.repository.books.list().await)
    }

    /// Take one copy out of the inventory.
    ///
    /// A missing id and an unknown book are both reported as bad requests.
    pub async fn checkout_book(&self, id: Option<&str>) -> AppResult<Book> {
        let id = require_id(id)?;

        let book = self
            .repository
            .books
            .update_by_id(id, |book| -> AppResult<Book> {
                if !book.is_available() {
                    return Err(AppError::BadRequest(MSG_BOOK_NOT_AVAILABLE.to_string()));
                }
                book.quantity -= 1;
                Ok(book.clone())
            })
            .await
            .ok_or_else(|| AppError::BadRequest(MSG_BOOK_NOT_FOUND.to_string()))?
            .inspect_err(|_| tracing::debug!("Checkout rejected, book {} not available", id))?;

        tracing::info!("Book checked out: id={} remaining={}", book.id, book.quantity);
        Ok(book)
    }

    /// Put one copy back into the inventory. No upper bound applies.
    pub async fn return_book(&self, id: Option<&str>) -> AppResult<Book> {
        let id = require_id(id)?;

        let book = self
            .repository
            .books
            .update_by_id(id, |book| -> AppResult<Book> {
                book.quantity = book
                    .quantity
                    .checked_add(1)
                    .ok_or_else(|| AppError::BadRequest(MSG_QUANTITY_OVERFLOW.to_string()))?;
                Ok(book.clone())
            })
            .await
            .ok_or_else(|| AppError::BadRequest(MSG_BOOK_NOT_FOUND.to_string()))??;

        tracing::info!("Book returned: id={} available={}", book.id, book.quantity);
        Ok(book)
    }
}

fn require_id(id: Option<&str>) -> AppResult<&str> {
    id.ok_or_else(|| AppError::BadRequest(MSG_MISSING_ID.to_string()))
}
