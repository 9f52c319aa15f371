//! Tests for email drafting and composition.

use assistant_kit::{compose, EmailDraft, KitError, TextPolisher};

struct Fixed(&'static str);

impl TextPolisher for Fixed {
    fn polish(&self, _prompt: &str) -> Result<String, KitError> {
        Ok(self.0.to_string())
    }
}

struct Down;

impl TextPolisher for Down {
    fn polish(&self, _prompt: &str) -> Result<String, KitError> {
        Err(KitError::Service {
            service: "Text".to_string(),
            message: "quota exceeded".to_string(),
        })
    }
}

fn draft() -> EmailDraft {
    EmailDraft::new("sam@example.com", "Lunch moved", "lunch is at 2 now").unwrap()
}

#[test]
fn draft_requires_every_field() {
    assert!(matches!(
        EmailDraft::new("", "Hi", "note"),
        Err(KitError::Invalid(_))
    ));
    assert!(matches!(
        EmailDraft::new("sam@example.com", " ", "note"),
        Err(KitError::Invalid(_))
    ));
    assert!(matches!(
        EmailDraft::new("sam@example.com", "Hi", "\n"),
        Err(KitError::Invalid(_))
    ));
    assert!(matches!(
        EmailDraft::new("not-an-address", "Hi", "note"),
        Err(KitError::Invalid(_))
    ));
}

#[test]
fn prompt_carries_subject_and_note() {
    let prompt = draft().prompt();
    assert!(prompt.starts_with("You are an expert email writer."));
    assert!(prompt.ends_with("Subject: Lunch moved\nUser Note: lunch is at 2 now"));
}

#[test]
fn polished_body_is_used() {
    let email = compose(&draft(), &Fixed("  Hi Sam,\n\nLunch is at 2.\n\nThanks  "));
    assert!(email.polished);
    assert_eq!(email.body, "Hi Sam,\n\nLunch is at 2.\n\nThanks");
}

#[test]
fn failure_falls_back_to_plain_template() {
    let email = compose(&draft(), &Down);
    assert!(!email.polished);
    assert_eq!(
        email.body,
        "Subject: Lunch moved\n\nHello,\n\nlunch is at 2 now\n\nBest regards,\nYour Personal Assistant"
    );
}

#[test]
fn empty_polish_falls_back_too() {
    assert!(!compose(&draft(), &Fixed("   ")).polished);
}

#[test]
fn message_renders_headers_then_body() {
    let email = compose(&draft(), &Fixed("Body"));
    assert_eq!(
        email.to_string(),
        "To: sam@example.com\nFrom: me\nSubject: Lunch moved\n\nBody"
    );
}
