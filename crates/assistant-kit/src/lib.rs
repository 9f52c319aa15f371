//! # assistant-kit
//!
//! The personal-assistant collaborators around the day planner: small
//! file-backed stores and typed models for the external services.
//!
//! ## Modules
//!
//! - [`reminders`] — JSON-backed reminder list (`{text, due}`)
//! - [`notes`] — plain-text journal
//! - [`weather`] — current-weather response model and request URL
//! - [`news`] — top-headlines response model and request URL
//! - [`email`] — draft validation, polishing with fallback, message rendering
//! - [`error`] — Error types

pub mod email;
pub mod error;
pub mod news;
pub mod notes;
pub mod reminders;
pub mod weather;

pub use email::{compose, EmailDraft, OutgoingEmail, TextPolisher};
pub use error::KitError;
pub use news::NewsResponse;
pub use notes::NotesStore;
pub use reminders::{Reminder, ReminderStore};
pub use weather::WeatherResponse;
