//! Mediatheque
//!
//! Catalog and loan bookkeeping for a small media library (books, DVDs,
//! CDs), with search, statistics and JSON persistence.

pub mod config;
pub mod demo;
pub mod error;
pub mod library;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use library::{Library, LibraryPolicy};
pub use models::{LibraryStats, Loan, Media, MediaKind};
pub use repository::{JsonFileRepository, LibraryRepository};
