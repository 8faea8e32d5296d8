//! Scripted walkthrough of the library: catalog, borrow/return, save, reload

use serde::Serialize;

use crate::{
    error::AppResult,
    library::{Library, LibraryPolicy},
    models::{LibraryStats, Media},
    repository::LibraryRepository,
};

/// What the walkthrough observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Statistics after the borrow/return cycle
    pub stats: LibraryStats,
    /// Descriptions of every media in the reloaded library
    pub descriptions: Vec<String>,
}

/// Sample catalog used by the walkthrough
pub fn sample_library(policy: LibraryPolicy) -> AppResult<Library> {
    Library::with_policy(policy)
        .with_media(Media::book("The Lord of the Rings", 101, 5, "J.R.R. Tolkien")?)?
        .with_media(Media::dvd("Inception", 201, 10, "2h28")?)
}

/// Build the sample catalog, lend and return one book, persist the library
/// through `repository` and describe what comes back.
pub fn run<R: LibraryRepository + ?Sized>(
    repository: &R,
    policy: LibraryPolicy,
) -> AppResult<DemoReport> {
    let mut library = sample_library(policy)?;

    let book = Media::book("The Lord of the Rings", 101, 5, "J.R.R. Tolkien")?;
    library.borrow(&book, "user1")?;
    tracing::info!("Borrow succeeded");
    library.return_media(&book)?;
    tracing::info!("Return succeeded");

    let stats = library.statistics();
    tracing::info!(
        total_media = stats.total_media,
        active_loans = stats.active_loans,
        total_copies = stats.total_copies,
        "Library statistics"
    );

    repository.save(&library)?;

    let mut reloaded = repository.load()?;
    reloaded.set_policy(policy);

    Ok(DemoReport {
        stats,
        descriptions: reloaded.all_media().iter().map(Media::describe).collect(),
    })
}
