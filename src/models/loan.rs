//! Loan (borrow) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Active loan of one copy of a media to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub user: String,
    pub media_reference: i32,
    pub borrowed_at: DateTime<Utc>,
    /// Whether the borrow decremented the media's copy count. Only such
    /// loans give a copy back on return.
    #[serde(default)]
    pub took_copy: bool,
}

impl Loan {
    pub fn new(user: impl Into<String>, media_reference: i32, borrowed_at: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            media_reference,
            borrowed_at,
            took_copy: false,
        }
    }

    /// Mark the loan as holding one of the media's copies
    pub fn taking_copy(mut self) -> Self {
        self.took_copy = true;
        self
    }

    pub fn is_for(&self, media_reference: i32) -> bool {
        self.media_reference == media_reference
    }
}
