//! Reminders / to-do list persisted as a JSON array of `{text, due}`.

use crate::error::{KitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

/// A reminder with an optional free-form due date/time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub text: String,
    #[serde(default)]
    pub due: Option<String>,
}

impl Reminder {
    /// A reminder; blank `due` strings are stored as `None`.
    pub fn new(text: impl Into<String>, due: Option<String>) -> Result<Self> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(KitError::Invalid("reminder text is required".to_string()));
        }
        let due = due
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Ok(Self { text, due })
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.due.as_deref().filter(|d| !d.is_empty()) {
            Some(due) => write!(f, "{}   ({})", self.text, due),
            None => f.write_str(&self.text),
        }
    }
}

/// File-backed reminder list.
#[derive(Debug, Clone)]
pub struct ReminderStore {
    path: PathBuf,
}

impl ReminderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All reminders in insertion order. A missing file is an empty list.
    pub fn list(&self) -> Result<Vec<Reminder>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn add(&self, reminder: Reminder) -> Result<()> {
        let mut all = self.list()?;
        all.push(reminder);
        self.save(&all)?;
        info!(count = all.len(), "reminder added");
        Ok(())
    }

    /// Remove the reminder at `number` (1-based, as displayed) and return it.
    pub fn remove(&self, number: usize) -> Result<Reminder> {
        let mut all = self.list()?;
        if number == 0 || number > all.len() {
            return Err(KitError::Invalid(format!(
                "no reminder number {} ({} stored)",
                number,
                all.len()
            )));
        }
        let removed = all.remove(number - 1);
        self.save(&all)?;
        info!(count = all.len(), "reminder removed");
        Ok(removed)
    }

    fn save(&self, reminders: &[Reminder]) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(reminders)?)?;
        Ok(())
    }
}
