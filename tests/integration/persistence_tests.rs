//! Save/load through the JSON file repository

use chrono::{TimeZone, Utc};
use mediatheque::{
    AppError, JsonFileRepository, Library, LibraryPolicy, LibraryRepository, Media, MediaKind,
};

fn populated() -> Library {
    let mut library = Library::new();
    library.add(Media::book("Dune", 1, 2, "Frank Herbert").unwrap()).unwrap();
    library.add(Media::dvd("Inception", 201, 10, "2h28").unwrap()).unwrap();
    library.add(Media::cd("Kind of Blue", 301, 1, "Miles Davis").unwrap()).unwrap();

    let at = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let cd = library.get(301).unwrap().clone();
    library.borrow_at(&cd, "Alice", at).unwrap();
    let book = library.get(1).unwrap().clone();
    library.borrow_at(&book, "Bob", at).unwrap();
    library
}

#[test]
fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::new(dir.path().join("library.json"));

    let library = populated();
    repository.save(&library).unwrap();
    let loaded = repository.load().unwrap();

    assert_eq!(loaded, library);
    assert_eq!(loaded.loans(), library.loans());
    assert_eq!(loaded.get(1).unwrap().author(), Some("Frank Herbert"));
    assert!(matches!(loaded.get(201).unwrap().kind, MediaKind::Dvd { .. }));
    assert!(matches!(loaded.get(301).unwrap().kind, MediaKind::Cd { .. }));
    assert!(loaded.get(301).unwrap().is_loaned_out);

    let names: Vec<&str> = loaded.loans_by_user("Alice").iter().map(|m| m.title.as_str()).collect();
    assert_eq!(names, vec!["Kind of Blue"]);
}

#[test]
fn test_save_replaces_document() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::new(dir.path().join("library.json"));

    repository.save(&populated()).unwrap();
    let small = Library::new()
        .with_media(Media::cd("Blue", 9, 1, "Joni Mitchell").unwrap())
        .unwrap();
    repository.save(&small).unwrap();

    let loaded = repository.load().unwrap();
    assert_eq!(loaded, small);
    assert!(loaded.loans().is_empty());
}

#[test]
fn test_loaded_library_takes_new_policy() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::new(dir.path().join("library.json"));
    repository.save(&populated()).unwrap();

    let mut loaded = repository.load().unwrap();
    assert_eq!(loaded.policy(), LibraryPolicy::default());

    loaded.set_policy(LibraryPolicy::permissive());
    let cd = loaded.get(301).unwrap().clone();
    // Copy count already at zero from the saved loan
    assert!(matches!(loaded.borrow(&cd, "Carol"), Err(AppError::Unavailable(301))));
}

#[test]
fn test_permissive_loan_returned_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::new(dir.path().join("library.json"));

    let mut library = Library::with_policy(LibraryPolicy::permissive());
    let dune = Media::book("Dune", 1, 2, "Frank Herbert").unwrap();
    library.add(dune.clone()).unwrap();
    library.borrow(&dune, "Alice").unwrap();
    repository.save(&library).unwrap();

    let mut loaded = repository.load().unwrap();
    assert_eq!(loaded.policy(), LibraryPolicy::default());
    assert!(!loaded.loans()[0].took_copy);

    loaded.return_media(&dune).unwrap();
    assert_eq!(loaded.get(1).unwrap().copies, 2);
    assert_eq!(loaded.statistics().total_copies, 2);
}

#[test]
fn test_tracked_loan_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::new(dir.path().join("library.json"));

    let mut library = Library::new();
    let dune = Media::book("Dune", 1, 2, "Frank Herbert").unwrap();
    library.add(dune.clone()).unwrap();
    library.borrow(&dune, "Alice").unwrap();
    repository.save(&library).unwrap();

    let mut loaded = repository.load().unwrap();
    loaded.set_policy(LibraryPolicy::permissive());
    loaded.return_media(&dune).unwrap();
    assert_eq!(loaded.get(1).unwrap().copies, 2);
}

#[test]
fn test_loan_without_copy_flag_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r#"{
            "media": [
                {"title": "Dune", "reference": 1, "copies": 2, "type": "book", "author": "Herbert"}
            ],
            "loans": [
                {"user": "Alice", "media_reference": 1, "borrowed_at": "2024-05-17T14:30:00Z"}
            ]
        }"#,
    )
    .unwrap();

    let mut loaded = JsonFileRepository::new(&path).load().unwrap();
    assert!(!loaded.loans()[0].took_copy);
    let dune = loaded.get(1).unwrap().clone();
    loaded.return_media(&dune).unwrap();
    assert_eq!(loaded.get(1).unwrap().copies, 2);
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let repository = JsonFileRepository::new(&path);

    assert!(matches!(repository.load(), Err(AppError::Io(_))));

    std::fs::write(&path, r#"{"media": [{"title": "Dune"}]}"#).unwrap();
    assert!(matches!(repository.load(), Err(AppError::Parse(_))));
}
