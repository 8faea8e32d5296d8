//! Library statistics

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    /// Number of catalog entries
    pub total_media: usize,
    /// Number of active loans
    pub active_loans: usize,
    /// Sum of available copies over the catalog
    pub total_copies: u64,
}

impl std::fmt::Display for LibraryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Library statistics:")?;
        writeln!(f, "Total media: {}", self.total_media)?;
        writeln!(f, "Active loans: {}", self.active_loans)?;
        write!(f, "Available copies: {}", self.total_copies)
    }
}
