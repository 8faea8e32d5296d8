//! Statistics over the catalog and loans

use super::Library;
use crate::models::LibraryStats;

impl Library {
    pub fn statistics(&self) -> LibraryStats {
        LibraryStats {
            total_media: self.media.len(),
            active_loans: self.loans.len(),
            total_copies: self.media.iter().map(|m| u64::from(m.copies)).sum(),
        }
    }
}
