//! Contact form - validation and submission to the email relay

mod form;
mod relay;

pub use form::{ContactForm, RelayPayload};
pub use relay::ContactRelay;

use thiserror::Error;

/// Why a contact submission did not go through
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid form: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Missing anti-abuse token")]
    MissingToken,

    #[error("Relay request failed: {0}")]
    Relay(#[from] reqwest::Error),

    #[error("Relay rejected the message: {0}")]
    Rejected(String),
}

impl ContactError {
    /// Text shown to the person filling in the form
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Validation(errors) => format!(
                "Por favor completa los siguientes campos:\n• {}",
                errors.join("\n• ")
            ),
            ContactError::MissingToken => {
                "Por favor completa la verificación de seguridad antes de enviar.".to_string()
            }
            ContactError::Relay(_) | ContactError::Rejected(_) => {
                "No pudimos enviar tu consulta. Por favor intenta nuevamente en unos minutos."
                    .to_string()
            }
        }
    }

    /// Whether the error was caused by the submitted data
    pub fn is_user_error(&self) -> bool {
        matches!(self, ContactError::Validation(_) | ContactError::MissingToken)
    }
}
