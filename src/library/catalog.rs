//! Catalog operations

use super::Library;
use crate::{
    error::{AppError, AppResult},
    models::Media,
};

impl Library {
    /// Append a media to the catalog.
    ///
    /// With `unique_references` set, a reference already in the catalog is
    /// rejected and nothing is added.
    pub fn add(&mut self, media: Media) -> AppResult<()> {
        if self.policy.unique_references && self.position_of_reference(media.reference).is_some() {
            tracing::warn!("Refusing duplicate media reference {}", media.reference);
            return Err(AppError::DuplicateReference(media.reference));
        }

        tracing::debug!(
            reference = media.reference,
            kind = media.kind_label(),
            "Adding media \"{}\"",
            media.title
        );
        self.media.push(media);
        Ok(())
    }

    /// Add a media and hand the library back, for chained construction
    pub fn with_media(mut self, media: Media) -> AppResult<Self> {
        self.add(media)?;
        Ok(self)
    }

    /// Remove the first catalog entry that is the same item as `media`
    /// (see [`Media::is_same_item`]), whatever its current copy count.
    /// Returns `None` when there is no such entry.
    pub fn remove(&mut self, media: &Media) -> Option<Media> {
        let index = self.media.iter().position(|m| m.is_same_item(media))?;
        tracing::debug!(reference = media.reference, "Removing media");
        Some(self.media.remove(index))
    }

    /// Remove the first catalog entry with the given reference
    pub fn remove_reference(&mut self, reference: i32) -> Option<Media> {
        let index = self.position_of_reference(reference)?;
        tracing::debug!(reference, "Removing media by reference");
        Some(self.media.remove(index))
    }

    /// First catalog entry with the given reference
    pub fn get(&self, reference: i32) -> Option<&Media> {
        self.media.iter().find(|m| m.reference == reference)
    }

    /// Case-insensitive search on titles, and on authors for books.
    /// An empty term matches the whole catalog.
    pub fn search(&self, term: &str) -> Vec<&Media> {
        let term = term.to_lowercase();
        self.media
            .iter()
            .filter(|m| m.matches_lowercase(&term))
            .collect()
    }

    /// The catalog in insertion order
    pub fn all_media(&self) -> &[Media] {
        &self.media
    }
}
