//! The library: catalog and loan bookkeeping
//!
//! Operations are split by concern:
//! - [`catalog`]: add, remove, lookup, search, enumeration
//! - [`loans`]: borrow, return, loans per user
//! - [`stats`]: aggregate counters
//!
//! Every operation either applies its whole mutation or leaves the library
//! untouched.

pub mod catalog;
pub mod loans;
pub mod stats;

use serde::{Deserialize, Serialize};

use crate::models::{Loan, Media};

/// How strictly the library enforces availability and reference uniqueness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryPolicy {
    /// Decrement `copies` on borrow and increment it on return.
    /// When off, `copies` is only checked, never updated.
    pub track_copies: bool,
    /// Reject `add` when the reference number is already catalogued
    pub unique_references: bool,
}

impl LibraryPolicy {
    /// No copy tracking and no duplicate check
    pub fn permissive() -> Self {
        Self {
            track_copies: false,
            unique_references: false,
        }
    }
}

impl Default for LibraryPolicy {
    fn default() -> Self {
        Self {
            track_copies: true,
            unique_references: true,
        }
    }
}

/// Owns the catalog and the active loans, both in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    media: Vec<Media>,
    #[serde(default)]
    loans: Vec<Loan>,
    #[serde(skip)]
    policy: LibraryPolicy,
}

impl Library {
    /// Create an empty library with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library with the given policy
    pub fn with_policy(policy: LibraryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> LibraryPolicy {
        self.policy
    }

    /// Change the policy. Already recorded state is kept as is.
    pub fn set_policy(&mut self, policy: LibraryPolicy) {
        self.policy = policy;
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    fn position_of_reference(&self, reference: i32) -> Option<usize> {
        self.media.iter().position(|m| m.reference == reference)
    }
}

/// Two libraries are equal when their catalogs and loans match in content
/// and order. The policy is runtime configuration and is not compared.
impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        self.media == other.media && self.loans == other.loans
    }
}

impl Eq for Library {}
