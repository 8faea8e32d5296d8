//! Media (catalog entry) model and related types

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Variant-specific part of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaKind {
    Book { author: String },
    Dvd { duration: String },
    Cd { artist: String },
}

impl MediaKind {
    /// Short label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Book { .. } => "Book",
            MediaKind::Dvd { .. } => "DVD",
            MediaKind::Cd { .. } => "CD",
        }
    }
}

/// Catalog entry: common fields plus one [`MediaKind`] payload.
///
/// `is_loaned_out` is advisory. The authoritative loan state is the
/// library's loan list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub title: String,
    pub reference: i32,
    pub copies: u32,
    #[serde(default)]
    pub is_loaned_out: bool,
    #[serde(flatten)]
    pub kind: MediaKind,
}

impl Media {
    /// Build a media, rejecting a blank title
    pub fn new(
        title: impl Into<String>,
        reference: i32,
        copies: u32,
        kind: MediaKind,
    ) -> AppResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "media {} must have a non-empty title",
                reference
            )));
        }

        Ok(Self {
            title,
            reference,
            copies,
            is_loaned_out: false,
            kind,
        })
    }

    pub fn book(
        title: impl Into<String>,
        reference: i32,
        copies: u32,
        author: impl Into<String>,
    ) -> AppResult<Self> {
        Self::new(title, reference, copies, MediaKind::Book { author: author.into() })
    }

    pub fn dvd(
        title: impl Into<String>,
        reference: i32,
        copies: u32,
        duration: impl Into<String>,
    ) -> AppResult<Self> {
        Self::new(title, reference, copies, MediaKind::Dvd { duration: duration.into() })
    }

    pub fn cd(
        title: impl Into<String>,
        reference: i32,
        copies: u32,
        artist: impl Into<String>,
    ) -> AppResult<Self> {
        Self::new(title, reference, copies, MediaKind::Cd { artist: artist.into() })
    }

    /// Author, for books only
    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            MediaKind::Book { author } => Some(author),
            _ => None,
        }
    }

    /// Whether `other` denotes the same catalog item: same reference, title
    /// and kind. Copy count and loan flag change with bookkeeping and are
    /// ignored.
    pub fn is_same_item(&self, other: &Media) -> bool {
        self.reference == other.reference && self.title == other.title && self.kind == other.kind
    }

    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }

    /// Case-insensitive match on the title, or on the author for books.
    /// `term` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self
                .author()
                .map(|author| author.to_lowercase().contains(term))
                .unwrap_or(false)
    }

    /// Case-insensitive match on the title, or on the author for books
    pub fn matches(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    /// Human readable description: common fields first, then the variant field
    pub fn describe(&self) -> String {
        let mut lines = vec![
            format!("Title: {}", self.title),
            format!("Reference number: {}", self.reference),
            format!("Copies: {}", self.copies),
        ];

        lines.push(match &self.kind {
            MediaKind::Book { author } => format!("Author: {}", author),
            MediaKind::Dvd { duration } => format!("Duration: {}", duration),
            MediaKind::Cd { artist } => format!("Artist: {}", artist),
        });

        lines.join("\n")
    }
}

impl std::fmt::Display for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
