//! Repository layer: persistence of the whole library state

pub mod json_file;

use crate::{error::AppResult, library::Library};

pub use json_file::JsonFileRepository;

/// Saves and restores a [`Library`] as one document.
///
/// `save` replaces the stored document wholesale. `load` fails with
/// [`AppError::Io`](crate::AppError::Io) when the document cannot be read
/// and [`AppError::Parse`](crate::AppError::Parse) when it is malformed.
#[cfg_attr(test, mockall::automock)]
pub trait LibraryRepository {
    fn save(&self, library: &Library) -> AppResult<()>;

    fn load(&self) -> AppResult<Library>;
}
