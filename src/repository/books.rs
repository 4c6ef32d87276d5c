//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::book::Book;

/// Ordered collection of books shared between handlers.
///
/// All access goes through a single lock; mutations hold the write lock
/// for their whole check-then-act sequence.
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// First book whose id matches
    pub async fn find_by_id(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Append a book at the end, without any check
    fn append(books: &mut Vec<Book>, book: Book) {
        books.push(book);
    }

    /// Append a book unless its id is already taken.
    ///
    /// Gives the book back in `Err` when the id exists.
    pub async fn insert_unique(&self, book: Book) -> Result<Book, Book> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id == book.id) {
            return Err(book);
        }
        Self::append(&mut books, book.clone());
        Ok(book)
    }

    /// Remove the first book whose id matches, keeping the others in order
    pub async fn remove_by_id(&self, id: &str) -> Option<Book> {
        let mut books = self.books.write().await;
        let pos = books.iter().position(|b| b.id == id)?;
        Some(books.remove(pos))
    }

    /// Run `f` on the first matching book while holding the write lock.
    ///
    /// Returns `None` when no book matches.
    pub async fn update_by_id<T, F>(&self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut Book) -> T,
    {
        let mut books = self.books.write().await;
        books.iter_mut().find(|b| b.id == id).map(f)
    }
}
