use std::path::PathBuf;

use crate::model::MenuItem;
use crate::session::{MenuSource, SourceError};

/// [`MenuSource`] backed by per-language JSON exports of the server menu.
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    dir: PathBuf,
}

impl FileMenuSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{language}.json"))
    }

    /// Languages with an export present, sorted.
    pub fn languages(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut languages: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        languages.sort();
        languages
    }
}

impl MenuSource for FileMenuSource {
    fn fetch(&self, language: &str) -> Result<Vec<MenuItem>, SourceError> {
        let path = self.path_for(language);
        if !path.is_file() {
            return Err(SourceError::Unavailable(language.to_string()));
        }
        let body = std::fs::read_to_string(&path)
            .map_err(|err| SourceError::Fetch(format!("{}: {err}", path.display())))?;
        serde_json::from_str(&body)
            .map_err(|err| SourceError::Malformed(format!("{}: {err}", path.display())))
    }
}
