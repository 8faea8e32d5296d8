//! Loan operations

use chrono::{DateTime, Utc};

use super::Library;
use crate::{
    error::{AppError, AppResult},
    models::{Loan, Media},
};

impl Library {
    /// Lend one copy of `media` to `user`, timestamped now
    pub fn borrow(&mut self, media: &Media, user: &str) -> AppResult<&Loan> {
        self.borrow_at(media, user, Utc::now())
    }

    /// Lend one copy of `media` to `user` at the given time.
    ///
    /// The catalog entry is located by reference number. With
    /// `track_copies` set its copy count is decremented and the loan
    /// remembers it took a copy.
    pub fn borrow_at(
        &mut self,
        media: &Media,
        user: &str,
        at: DateTime<Utc>,
    ) -> AppResult<&Loan> {
        let reference = media.reference;
        let track_copies = self.policy.track_copies;

        let index = self
            .position_of_reference(reference)
            .ok_or(AppError::NotFound(reference))?;
        let entry = &mut self.media[index];

        if entry.copies == 0 {
            tracing::warn!("Borrow of media {} refused: no copy available", reference);
            return Err(AppError::Unavailable(reference));
        }

        if track_copies {
            entry.copies -= 1;
        }
        entry.is_loaned_out = true;

        tracing::debug!(reference, user, copies_left = entry.copies, "Media borrowed");
        let loan = Loan::new(user, reference, at);
        self.loans.push(if track_copies { loan.taking_copy() } else { loan });

        let loan = self.loans.len() - 1;
        Ok(&self.loans[loan])
    }

    /// Close the earliest active loan on `media`.
    ///
    /// The copy count is incremented back only when the loan took a copy,
    /// whatever the current policy. The advisory `is_loaned_out` flag is
    /// cleared once no loan remains.
    pub fn return_media(&mut self, media: &Media) -> AppResult<Loan> {
        let reference = media.reference;

        let index = self
            .position_of_reference(reference)
            .ok_or(AppError::NotFound(reference))?;
        let loan_index = self
            .loans
            .iter()
            .position(|loan| loan.is_for(reference))
            .ok_or_else(|| {
                tracing::warn!("Return of media {} refused: not on loan", reference);
                AppError::NotLoaned(reference)
            })?;

        let loan = self.loans.remove(loan_index);
        let still_loaned = self.loans.iter().any(|l| l.is_for(reference));

        let entry = &mut self.media[index];
        if loan.took_copy {
            entry.copies = entry.copies.saturating_add(1);
        }
        entry.is_loaned_out = still_loaned;

        tracing::debug!(reference, user = %loan.user, "Media returned");
        Ok(loan)
    }

    /// Media on loan to `user` (exact, case-sensitive match), in loan order.
    /// Loans whose media has left the catalog are skipped.
    pub fn loans_by_user(&self, user: &str) -> Vec<&Media> {
        self.loans
            .iter()
            .filter(|loan| loan.user == user)
            .filter_map(|loan| self.get(loan.media_reference))
            .collect()
    }

    /// Active loans in the order they were made
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }
}
