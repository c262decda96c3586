//! Contact form handling: collect, log, acknowledge, reset

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Result, TravelRecError};

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We will get back to you soon.";

/// Field values of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Reply to a successful submission
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement {
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactForm {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Log the submission, acknowledge it and reset the form.
    ///
    /// A form with a blank field is rejected and left untouched.
    pub fn submit(&mut self) -> Result<Acknowledgement> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(TravelRecError::validation(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
        }

        info!(
            name = self.name.trim(),
            email = self.email.trim(),
            message = self.message.trim(),
            "Form submitted"
        );

        self.reset();
        Ok(Acknowledgement {
            message: ACKNOWLEDGEMENT.to_string(),
            received_at: Utc::now(),
        })
    }
}
