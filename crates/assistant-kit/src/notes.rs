//! Notes / journal kept as a single text file.

use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The whole journal. A missing file reads as empty.
    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the journal with `text`.
    pub fn save(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)?;
        info!(bytes = text.len(), path = %self.path.display(), "notes saved");
        Ok(())
    }
}
