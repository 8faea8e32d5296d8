//! Data models for Mediatheque

pub mod loan;
pub mod media;
pub mod stats;

// Re-export commonly used types
pub use loan::Loan;
pub use media::{Media, MediaKind};
pub use stats::LibraryStats;
