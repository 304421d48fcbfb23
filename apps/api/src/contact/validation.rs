use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown to the visitor when a required field is blank.
pub const MISSING_FIELDS_WARNING: &str = "Please fill in your name, email, and message.";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    #[default]
    Collaboration,
    InternshipOrJob,
    DesignFeedback,
    GeneralInquiry,
    JustSayingHi,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Collaboration,
        Subject::InternshipOrJob,
        Subject::DesignFeedback,
        Subject::GeneralInquiry,
        Subject::JustSayingHi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Collaboration => "🤝 Collaboration Opportunity",
            Subject::InternshipOrJob => "💼 Internship / Job Offer",
            Subject::DesignFeedback => "🎨 Design Feedback",
            Subject::GeneralInquiry => "💬 General Inquiry",
            Subject::JustSayingHi => "🙌 Just Saying Hi",
        }
    }
}

/// Contact form contents as typed by the visitor. Never stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFormDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default)]
    pub message: String,
    /// "Notify me about new projects"
    #[serde(default)]
    pub notify: bool,
    /// "Mark as Urgent"
    #[serde(default)]
    pub urgent: bool,
}

/// A submission that passed validation, with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
    pub notify: bool,
    pub urgent: bool,
}

#[derive(Debug, Error, PartialEq)]
#[error("Please fill in your name, email, and message.")]
pub struct MissingFields {
    /// Blank fields, in form order.
    pub fields: Vec<&'static str>,
}

/// Name, email and message must be non-blank. The email is not otherwise checked.
/// Consumes the draft: it is gone after the attempt, whatever the outcome.
pub fn validate_submission(draft: ContactFormDraft) -> Result<Accepted, MissingFields> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let message = draft.message.trim();

    let fields: Vec<&'static str> = [("name", name), ("email", email), ("message", message)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

    if !fields.is_empty() {
        return Err(MissingFields { fields });
    }

    Ok(Accepted {
        name: name.to_string(),
        email: email.to_string(),
        subject: draft.subject,
        message: message.to_string(),
        notify: draft.notify,
        urgent: draft.urgent,
    })
}
