//! JSON file repository

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    process,
};

use super::LibraryRepository;
use crate::{error::AppResult, library::Library};

/// Stores the library as a pretty-printed JSON document at `path`
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the document is written to before being renamed over `path`
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "library.json".into());
        name.push(format!(".{}.tmp", process::id()));
        self.path.with_file_name(name)
    }
}

impl LibraryRepository for JsonFileRepository {
    fn save(&self, library: &Library) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(library)?;
        let temp_path = self.temp_path();

        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(serialized.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&temp_path, &self.path)) {
            // Cleanup is best effort
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!(
            "Saved {} media and {} loans to {}",
            library.len(),
            library.loans().len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> AppResult<Library> {
        let contents = fs::read_to_string(&self.path)?;
        let library: Library = serde_json::from_str(&contents)?;

        tracing::info!(
            "Loaded {} media and {} loans from {}",
            library.len(),
            library.loans().len(),
            self.path.display()
        );
        Ok(library)
    }
}
