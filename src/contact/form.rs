//! Contact form fields and the payload sent to the relay

use serde::{Deserialize, Serialize};

use super::ContactError;
use crate::config::ContactConfig;

const MIN_MESSAGE_CHARS: usize = 10;

/// Data submitted through the site's contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub nombre: String,
    pub empresa: String,
    pub email: String,
    pub telefono: String,
    pub mensaje: String,
    #[serde(rename = "h-captcha-response", skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

impl ContactForm {
    /// Copy of the form with every field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            empresa: self.empresa.trim().to_string(),
            email: self.email.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            mensaje: self.mensaje.trim().to_string(),
            captcha: self
                .captcha
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }

    /// Check the trimmed form, collecting every problem in field order
    pub fn validate(&self) -> Result<(), ContactError> {
        let form = self.trimmed();
        let mut errors = Vec::new();

        if form.nombre.is_empty() {
            errors.push("El nombre es requerido".to_string());
        }
        if form.empresa.is_empty() {
            errors.push("El nombre de la empresa es requerido".to_string());
        }
        if form.email.is_empty() || !form.email.contains('@') {
            errors.push("Un email válido es requerido".to_string());
        }
        if form.telefono.is_empty() {
            errors.push("El teléfono es requerido para contactarte".to_string());
        }
        // Browsers measure length in UTF-16 code units
        if form.mensaje.encode_utf16().count() < MIN_MESSAGE_CHARS {
            errors.push(format!(
                "El mensaje debe tener al menos {} caracteres",
                MIN_MESSAGE_CHARS
            ));
        }

        if !errors.is_empty() {
            return Err(ContactError::Validation(errors));
        }
        if form.captcha.is_none() {
            return Err(ContactError::MissingToken);
        }
        Ok(())
    }

    /// Thank-you text shown after a successful submission
    pub fn success_message(&self, site_name: &str) -> String {
        let form = self.trimmed();
        format!(
            "¡Gracias {}! Hemos recibido tu consulta sobre {}. Un especialista de {} se pondrá en contacto contigo en las próximas 24 horas al {}.",
            form.nombre, form.empresa, site_name, form.telefono
        )
    }
}

/// JSON body posted to the email relay
///
/// Field names are matched by the relay service and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub nombre: String,
    pub empresa: String,
    pub email: String,
    pub telefono: String,
    pub mensaje: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha: String,
}

impl RelayPayload {
    /// Build the payload for a validated form
    pub fn new(config: &ContactConfig, form: &ContactForm) -> Result<Self, ContactError> {
        form.validate()?;
        let form = form.trimmed();
        Ok(Self {
            access_key: config.access_key.clone(),
            subject: config.subject.clone(),
            from_name: config.from_name.clone(),
            nombre: form.nombre,
            empresa: form.empresa,
            email: form.email,
            telefono: form.telefono,
            mensaje: form.mensaje,
            captcha: form.captcha.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            nombre: " Ana ".to_string(),
            empresa: "Acme".to_string(),
            email: "ana@acme.com".to_string(),
            telefono: "+54 11 5555 5555".to_string(),
            mensaje: "Quiero automatizar mi negocio".to_string(),
            captcha: Some("token-123".to_string()),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_collects_all_errors_in_order() {
        let form = ContactForm {
            email: "sin-arroba".to_string(),
            mensaje: "corto".to_string(),
            captcha: Some("t".to_string()),
            ..Default::default()
        };
        match form.validate() {
            Err(ContactError::Validation(errors)) => assert_eq!(
                errors,
                vec![
                    "El nombre es requerido",
                    "El nombre de la empresa es requerido",
                    "Un email válido es requerido",
                    "El teléfono es requerido para contactarte",
                    "El mensaje debe tener al menos 10 caracteres",
                ]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let mut form = valid_form();
        form.nombre = "   ".to_string();
        assert!(matches!(form.validate(), Err(ContactError::Validation(e)) if e.len() == 1));
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        let mut form = valid_form();
        form.mensaje = "😀😀😀😀😀".to_string();
        assert!(form.validate().is_ok());

        form.mensaje = "😀😀😀😀".to_string();
        assert!(matches!(form.validate(), Err(ContactError::Validation(e)) if e.len() == 1));

        form.mensaje = "áéíóúñüç¿¡".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_token_blocks() {
        let mut form = valid_form();
        form.captcha = None;
        assert!(matches!(form.validate(), Err(ContactError::MissingToken)));

        form.captcha = Some("  ".to_string());
        assert!(matches!(form.validate(), Err(ContactError::MissingToken)));
    }

    #[test]
    fn test_parse_form_with_token_field() {
        let json = r#"{"nombre": "Ana", "email": "a@b.c", "h-captcha-response": "tok"}"#;
        let form: ContactForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.captcha.as_deref(), Some("tok"));
        assert_eq!(form.empresa, "");
    }

    #[test]
    fn test_payload_field_names() {
        let mut config = ContactConfig::default();
        config.access_key = "key".to_string();
        let payload = RelayPayload::new(&config, &valid_form()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "access_key",
                "subject",
                "from_name",
                "nombre",
                "empresa",
                "email",
                "telefono",
                "mensaje",
                "h-captcha-response",
            ]
        );
        assert_eq!(value["nombre"], "Ana");
        assert_eq!(value["h-captcha-response"], "token-123");
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            valid_form().success_message("LOOM.IA"),
            "¡Gracias Ana! Hemos recibido tu consulta sobre Acme. Un especialista de LOOM.IA se pondrá en contacto contigo en las próximas 24 horas al +54 11 5555 5555."
        );
    }
}
