//! HTTP adapter for the transactional email service.
//!
//! The service accepts a JSON body `{from, to, subject, html, replyTo}` and
//! answers with `{id}` on acceptance.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EmailTransport, OutboundEmail, TransportError};

/// reqwest-backed [`EmailTransport`].
pub struct HttpEmailTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    #[serde(rename = "replyTo", skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}

impl HttpEmailTransport {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl EmailTransport for HttpEmailTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, TransportError> {
        let body = SendRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html_body,
            reply_to: email.reply_to.as_deref(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        // A body without an id is still a successful send.
        let parsed: SendResponse = resp.json().await.unwrap_or(SendResponse { id: None });
        debug!(to = %email.to, id = ?parsed.id, "email accepted by transport");
        Ok(parsed.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "noreply@vitalis.example".into(),
            to: "enquiries@vitalis.example".into(),
            subject: "[EXISTING MEMBER] Jo Soap - billing".into(),
            html_body: "<html></html>".into(),
            reply_to: Some("jo@x.com".into()),
        }
    }

    #[tokio::test]
    async fn test_send_returns_message_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("authorization", "Bearer key-123"))
            .and(body_partial_json(serde_json::json!({
                "to": "enquiries@vitalis.example",
                "replyTo": "jo@x.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "msg-42"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpEmailTransport::new(format!("{}/send", server.uri()), "key-123");
        let id = transport.send(&email()).await.unwrap();
        assert_eq!(id.as_deref(), Some("msg-42"));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_status_and_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad address"))
            .mount(&server)
            .await;

        let transport = HttpEmailTransport::new(format!("{}/send", server.uri()), "k");
        let err = transport.send(&email()).await.unwrap_err();
        match err {
            TransportError::Rejected { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail, "bad address");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
