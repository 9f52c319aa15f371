//! Email composition -- turn a subject and a short note into a full message.
//!
//! A [`TextPolisher`] (a generative-text service) may rewrite the note into a
//! complete email. When it fails, the note is wrapped in a plain template
//! instead, so composing never fails once the draft itself is valid.

use crate::error::{KitError, Result};
use std::fmt;
use tracing::warn;

/// Sender shown on outgoing messages; the mail service substitutes the account.
pub const DEFAULT_SENDER: &str = "me";

/// A user's draft: recipient, subject and a short note.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    to: String,
    subject: String,
    note: String,
}

impl EmailDraft {
    /// Validate a draft; every field must be non-blank.
    pub fn new(to: &str, subject: &str, note: &str) -> Result<Self> {
        let (to, subject, note) = (to.trim(), subject.trim(), note.trim());
        if to.is_empty() || subject.is_empty() || note.is_empty() {
            return Err(KitError::Invalid("Please fill all fields.".to_string()));
        }
        if !to.contains('@') {
            return Err(KitError::Invalid(format!("'{}' is not an email address", to)));
        }
        Ok(Self {
            to: to.to_string(),
            subject: subject.to_string(),
            note: note.to_string(),
        })
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Instruction sent to the text polisher.
    pub fn prompt(&self) -> String {
        format!(
            "You are an expert email writer. \
             Given the subject and a short user note, rewrite them into a complete, polite, \
             professional email with a greeting, clear body, and closing. \
             Preserve meaning and ensure it matches the subject context.\n\n\
             Subject: {}\n\
             User Note: {}",
            self.subject, self.note
        )
    }

    /// Plain body used when no polished text is available.
    pub fn fallback_body(&self) -> String {
        format!(
            "Subject: {}\n\nHello,\n\n{}\n\nBest regards,\nYour Personal Assistant",
            self.subject, self.note
        )
    }
}

/// A generative-text service that rewrites a prompt into finished prose.
pub trait TextPolisher {
    fn polish(&self, prompt: &str) -> Result<String>;
}

/// A fully composed message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
    /// Whether the body came from the polisher rather than the fallback template.
    pub polished: bool,
}

impl fmt::Display for OutgoingEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "To: {}\nFrom: {}\nSubject: {}\n\n{}",
            self.to, self.from, self.subject, self.body
        )
    }
}

/// Compose `draft`, polishing it when possible and falling back otherwise.
pub fn compose(draft: &EmailDraft, polisher: &dyn TextPolisher) -> OutgoingEmail {
    let (body, polished) = match polisher.polish(&draft.prompt()) {
        Ok(text) if !text.trim().is_empty() => (text.trim().to_string(), true),
        Ok(_) => {
            warn!("text polisher returned an empty body, using plain format");
            (draft.fallback_body(), false)
        }
        Err(e) => {
            warn!(error = %e, "text polisher failed, using plain format");
            (draft.fallback_body(), false)
        }
    };

    OutgoingEmail {
        to: draft.to.clone(),
        from: DEFAULT_SENDER.to_string(),
        subject: draft.subject.clone(),
        body,
        polished,
    }
}
