//! Data models for the Books API

pub mod book;
pub mod category;
pub mod timestamp;

// Re-export commonly used types
pub use book::{Book, BookInput, UpdateBookForm};
pub use category::{BookCategory, CATEGORIES};
