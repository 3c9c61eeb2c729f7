//! Email relay client

use serde::Deserialize;

use super::{ContactError, ContactForm, RelayPayload};
use crate::config::ContactConfig;

/// Reply body of the relay service
#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    message: String,
}

fn default_success() -> bool {
    true
}

/// Sends validated contact forms to the configured relay endpoint
#[derive(Debug, Clone)]
pub struct ContactRelay {
    client: reqwest::Client,
    config: ContactConfig,
}

impl ContactRelay {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Validate and forward a form
    ///
    /// Invalid forms and forms without a token fail before any request is made.
    pub async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        let payload = RelayPayload::new(&self.config, form)?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply = serde_json::from_str::<RelayResponse>(&body).ok();

        if !status.is_success() {
            let reason = reply
                .map(|r| r.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("status {}", status.as_u16()));
            return Err(ContactError::Rejected(reason));
        }

        match reply {
            Some(reply) if !reply.success => Err(ContactError::Rejected(reply.message)),
            _ => {
                tracing::info!("Contact form from {} relayed", payload.email);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    fn valid_form() -> ContactForm {
        ContactForm {
            nombre: "Ana".to_string(),
            empresa: "Acme".to_string(),
            email: "ana@acme.com".to_string(),
            telefono: "123".to_string(),
            mensaje: "Necesito una demo".to_string(),
            captcha: Some("token-123".to_string()),
        }
    }

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn relay_for(endpoint: String) -> ContactRelay {
        ContactRelay::new(ContactConfig {
            endpoint,
            access_key: "key".to_string(),
            ..ContactConfig::default()
        })
    }

    #[tokio::test]
    async fn test_submit_forwards_payload() {
        let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let sink = captured.clone();
        let app = Router::new().route(
            "/submit",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({ "success": true, "message": "Email sent" }))
                }
            }),
        );
        let base = spawn(app).await;

        relay_for(format!("{}/submit", base))
            .submit(&valid_form())
            .await
            .unwrap();

        let body = captured.lock().unwrap().clone().unwrap();
        assert_eq!(body["access_key"], "key");
        assert_eq!(body["email"], "ana@acme.com");
        assert_eq!(body["h-captcha-response"], "token-123");
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let app = Router::new()
            .route(
                "/bad-key",
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "success": false, "message": "Invalid access key" })),
                    )
                }),
            )
            .route(
                "/soft-fail",
                post(|| async { Json(json!({ "success": false, "message": "Captcha failed" })) }),
            );
        let base = spawn(app).await;

        let err = relay_for(format!("{}/bad-key", base))
            .submit(&valid_form())
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Rejected(ref m) if m == "Invalid access key"));

        let err = relay_for(format!("{}/soft-fail", base))
            .submit(&valid_form())
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Rejected(ref m) if m == "Captcha failed"));
    }

    #[tokio::test]
    async fn test_missing_token_makes_no_request() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut form = valid_form();
        form.captcha = None;
        let err = relay_for(format!("http://{}/submit", addr))
            .submit(&form)
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::MissingToken));
    }

    #[tokio::test]
    async fn test_unreachable_relay() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = relay_for(format!("http://{}/submit", addr))
            .submit(&valid_form())
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Relay(_)));
        assert!(!err.is_user_error());
    }
}
