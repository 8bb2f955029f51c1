//! Send the two emails for a classified enquiry.
//!
//! The operational notification goes out strictly first; the acknowledgement
//! is only attempted once the notification has been accepted. A transport
//! failure at either step aborts the sequence and surfaces one error, so the
//! outcome is always "both sent" or "failed".

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::classify::{EnquiryForm, Variant};
use super::render;
use crate::transport::{EmailTransport, OutboundEmail, TransportError};

/// Envelope routing for one enquiry variant: where the operational
/// notification lands and which address both emails are sent from.
/// Configuration, not computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub to: String,
    pub from: String,
}

/// Per-variant routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryRouting {
    pub existing_member: Route,
    pub prospective_client: Route,
    pub quote_request: Route,
    /// "Submitted to" display label on the notification. Independent of the
    /// envelope recipients above.
    pub display_to: String,
}

impl EnquiryRouting {
    pub fn route(&self, variant: Variant) -> &Route {
        match variant {
            Variant::ExistingMember => &self.existing_member,
            Variant::ProspectiveClient => &self.prospective_client,
            Variant::QuoteRequest => &self.quote_request,
        }
    }
}

/// Dispatch failure: the transport refused or the request never completed.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Message identifiers assigned by the transport, when it provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub admin_message_id: Option<String>,
    pub user_message_id: Option<String>,
}

/// Sends enquiry notifications through an injected [`EmailTransport`].
pub struct Dispatcher {
    transport: Arc<dyn EmailTransport>,
    routing: EnquiryRouting,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn EmailTransport>, routing: EnquiryRouting) -> Self {
        Self { transport, routing }
    }

    /// Render and send both emails for the form. The notification goes first;
    /// if it fails the acknowledgement is never attempted.
    pub async fn dispatch(&self, form: &EnquiryForm) -> Result<DispatchReceipt, DispatchError> {
        let variant = form.variant();
        let route = self.routing.route(variant);
        let contact = form.contact();

        let notification = OutboundEmail {
            from: route.from.clone(),
            to: route.to.clone(),
            subject: render::notification_subject(form),
            html_body: render::notification_html(form, &self.routing.display_to),
            reply_to: Some(contact.email.clone()),
        };
        let admin_message_id = self.transport.send(&notification).await?;
        info!(variant = variant.as_str(), "sent enquiry notification");

        let acknowledgement = OutboundEmail {
            from: route.from.clone(),
            to: contact.email.clone(),
            subject: render::acknowledgement_subject(),
            html_body: render::acknowledgement_html(form),
            reply_to: None,
        };
        let user_message_id = self.transport.send(&acknowledgement).await?;
        info!(variant = variant.as_str(), "sent enquiry acknowledgement");

        Ok(DispatchReceipt {
            admin_message_id,
            user_message_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::classify::Contact;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport double recording every attempt; optionally fails the Nth.
    struct RecordingTransport {
        attempts: Mutex<Vec<OutboundEmail>>,
        fail_on_call: Option<usize>,
    }

    impl RecordingTransport {
        fn new(fail_on_call: Option<usize>) -> Self {
            Self {
                attempts: Mutex::new(Vec::new()),
                fail_on_call,
            }
        }
    }

    #[async_trait]
    impl EmailTransport for RecordingTransport {
        async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, TransportError> {
            let mut attempts = self.attempts.lock().unwrap();
            let call = attempts.len();
            attempts.push(email.clone());
            if self.fail_on_call == Some(call) {
                return Err(TransportError::Request("connection refused".into()));
            }
            Ok(Some(format!("msg-{}", attempts.len())))
        }
    }

    fn routing() -> EnquiryRouting {
        EnquiryRouting {
            existing_member: Route {
                to: "members@vitalis.example".into(),
                from: "noreply@vitalis.example".into(),
            },
            prospective_client: Route {
                to: "sales@vitalis.example".into(),
                from: "noreply@vitalis.example".into(),
            },
            quote_request: Route {
                to: "quotes@vitalis.example".into(),
                from: "noreply@vitalis.example".into(),
            },
            display_to: "enquiries@vitalis.example".into(),
        }
    }

    fn form() -> EnquiryForm {
        EnquiryForm::ExistingMember {
            contact: Contact {
                first_name: "Jo".into(),
                last_name: "Soap".into(),
                phone: "0810000000".into(),
                email: "jo@x.com".into(),
                message: "Help".into(),
            },
            enquiry: "billing".into(),
        }
    }

    #[tokio::test]
    async fn test_sends_notification_then_acknowledgement() {
        let transport = Arc::new(RecordingTransport::new(None));
        let dispatcher = Dispatcher::new(transport.clone(), routing());

        let receipt = dispatcher.dispatch(&form()).await.unwrap();
        assert_eq!(receipt.admin_message_id.as_deref(), Some("msg-1"));
        assert_eq!(receipt.user_message_id.as_deref(), Some("msg-2"));

        let sent = transport.attempts.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "members@vitalis.example");
        assert_eq!(sent[0].reply_to.as_deref(), Some("jo@x.com"));
        assert_eq!(sent[1].to, "jo@x.com");
        assert_eq!(sent[1].reply_to, None);
    }

    #[tokio::test]
    async fn test_notification_failure_skips_acknowledgement() {
        let transport = Arc::new(RecordingTransport::new(Some(0)));
        let dispatcher = Dispatcher::new(transport.clone(), routing());

        let err = dispatcher.dispatch(&form()).await.unwrap_err();
        assert!(matches!(err, DispatchError::Transport(_)));
        // Exactly one attempt: the acknowledgement was never tried.
        assert_eq!(transport.attempts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_routing_table_keys_on_variant() {
        let routing = routing();
        assert_eq!(
            routing.route(Variant::QuoteRequest).to,
            "quotes@vitalis.example"
        );
        assert_eq!(
            routing.route(Variant::ProspectiveClient).to,
            "sales@vitalis.example"
        );
    }
}
