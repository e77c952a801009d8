use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A message composed in the contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// A per-field validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

impl ContactMessage {
    /// Validate all fields, returning every failure in form order.
    /// An empty result means the message may be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name is required",
            });
        }

        if self.email.trim().is_empty() || !email_regex().is_match(self.email.trim()) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Please enter a valid email address",
            });
        }

        if self.subject.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Subject,
                message: "Subject is required",
            });
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                message: "Message is required",
            });
        }

        errors
    }
}

/// Channel used to open an email composer outside the contact form.
///
/// An explicit configured policy; the channel is never inferred from
/// the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComposeChannel {
    /// Gmail web compose URL
    WebCompose,
    /// Direct mailto: link for the local mail client
    #[default]
    Mailto,
}

impl ComposeChannel {
    /// Build the compose URL for this channel
    pub fn compose_url(&self, to: &str, subject: &str) -> String {
        match self {
            ComposeChannel::WebCompose => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("view", "cm")
                    .append_pair("fs", "1")
                    .append_pair("to", to)
                    .append_pair("su", subject)
                    .finish();
                format!("https://mail.google.com/mail/?{}", query)
            }
            ComposeChannel::Mailto => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("subject", subject)
                    .finish();
                format!("mailto:{}?{}", to, query)
            }
        }
    }
}
