//! Classify an untyped enquiry payload into one of three form variants.
//!
//! The marketing site posts all three contact forms to the same endpoint, so
//! the payload carries no explicit tag. Classification is structural and
//! ordered: the first matching rule wins, and the order is load-bearing — a
//! payload carrying both `enquiry` and `planCategory` must route as an
//! existing-member enquiry.

use serde_json::{Map, Value};
use thiserror::Error;

/// Discriminator keys checked in order. First match wins.
///
/// 1. `enquiry` → existing member
/// 2. `infoAbout` + `heardFrom` → prospective client
/// 3. `planCategory` → quote request
pub const DISCRIMINATORS: [&str; 4] = ["enquiry", "infoAbout", "heardFrom", "planCategory"];

/// Contact details common to every form variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    /// Free-text message. Absent or non-text fields default to empty here,
    /// at the boundary, so rendering never has to handle a missing message.
    pub message: String,
}

/// A child line on a family quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    pub age: String,
}

/// A classified enquiry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnquiryForm {
    /// An existing member with a categorized enquiry (billing, claims, ...).
    ExistingMember { contact: Contact, enquiry: String },
    /// A prospective client asking for information.
    ProspectiveClient {
        contact: Contact,
        info_about: String,
        heard_from: String,
    },
    /// A quote request against a plan category.
    QuoteRequest {
        contact: Contact,
        plan_category: String,
        senior_category: Option<String>,
        tier: Option<String>,
        sub_category: String,
        children: Vec<ChildEntry>,
    },
}

impl EnquiryForm {
    /// The submitter's contact details, whichever variant this is.
    pub fn contact(&self) -> &Contact {
        match self {
            EnquiryForm::ExistingMember { contact, .. } => contact,
            EnquiryForm::ProspectiveClient { contact, .. } => contact,
            EnquiryForm::QuoteRequest { contact, .. } => contact,
        }
    }

    /// Stable variant name used for routing lookups and logs.
    pub fn variant(&self) -> Variant {
        match self {
            EnquiryForm::ExistingMember { .. } => Variant::ExistingMember,
            EnquiryForm::ProspectiveClient { .. } => Variant::ProspectiveClient,
            EnquiryForm::QuoteRequest { .. } => Variant::QuoteRequest,
        }
    }
}

/// The three mutually-exclusive enquiry shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    ExistingMember,
    ProspectiveClient,
    QuoteRequest,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::ExistingMember => "existing-member",
            Variant::ProspectiveClient => "prospective-client",
            Variant::QuoteRequest => "quote-request",
        }
    }
}

/// Classification failure: no discriminating field was present.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("payload matches no known enquiry form")]
    Unrecognised,
}

/// Classify a raw payload map into an [`EnquiryForm`].
///
/// Ordered, first-match-wins on field *presence* (values are extracted
/// leniently afterwards). Returns [`ClassifyError::Unrecognised`] when no
/// discriminator is present.
pub fn classify(data: &Map<String, Value>) -> Result<EnquiryForm, ClassifyError> {
    let contact = Contact {
        first_name: text(data, "firstName"),
        last_name: text(data, "lastName"),
        phone: text(data, "phone"),
        email: text(data, "email"),
        message: text(data, "message"),
    };

    if data.contains_key("enquiry") {
        return Ok(EnquiryForm::ExistingMember {
            contact,
            enquiry: text(data, "enquiry"),
        });
    }

    if data.contains_key("infoAbout") && data.contains_key("heardFrom") {
        return Ok(EnquiryForm::ProspectiveClient {
            contact,
            info_about: text(data, "infoAbout"),
            heard_from: text(data, "heardFrom"),
        });
    }

    if data.contains_key("planCategory") {
        return Ok(EnquiryForm::QuoteRequest {
            contact,
            plan_category: text(data, "planCategory"),
            senior_category: opt_text(data, "seniorCategory"),
            tier: opt_text(data, "tier"),
            sub_category: text(data, "subCategory"),
            children: children(data),
        });
    }

    Err(ClassifyError::Unrecognised)
}

/// Lenient text extraction: absent or non-string values become `""`.
fn text(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional text: `None` when the key is absent or not a string.
fn opt_text(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse the `children` array, skipping malformed entries.
fn children(data: &Map<String, Value>) -> Vec<ChildEntry> {
    let Some(Value::Array(items)) = data.get("children") else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            Some(ChildEntry {
                name: text(obj, "name"),
                age: text(obj, "age"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_enquiry_field_classifies_existing_member() {
        let data = map(json!({
            "firstName": "Jo", "lastName": "Soap",
            "phone": "0810000000", "email": "jo@x.com",
            "enquiry": "billing", "message": "Help"
        }));
        let form = classify(&data).unwrap();
        assert_eq!(form.variant(), Variant::ExistingMember);
        assert_eq!(form.contact().first_name, "Jo");
    }

    #[test]
    fn test_enquiry_wins_over_plan_category() {
        // Ordering is load-bearing: a payload with both discriminators
        // must route as an existing-member enquiry.
        let data = map(json!({
            "enquiry": "claims",
            "planCategory": "hospital"
        }));
        assert_eq!(classify(&data).unwrap().variant(), Variant::ExistingMember);
    }

    #[test]
    fn test_prospective_client_needs_both_fields() {
        let data = map(json!({ "infoAbout": "plans", "heardFrom": "radio" }));
        assert_eq!(
            classify(&data).unwrap().variant(),
            Variant::ProspectiveClient
        );

        // infoAbout alone is not enough
        let data = map(json!({ "infoAbout": "plans" }));
        assert_eq!(classify(&data), Err(ClassifyError::Unrecognised));
    }

    #[test]
    fn test_quote_request_with_children() {
        let data = map(json!({
            "planCategory": "day-to-day",
            "subCategory": "family",
            "tier": "gold",
            "children": [
                {"name": "Ana", "age": "7"},
                {"name": "Ben", "age": "4"}
            ]
        }));
        match classify(&data).unwrap() {
            EnquiryForm::QuoteRequest {
                tier,
                senior_category,
                sub_category,
                children,
                ..
            } => {
                assert_eq!(tier.as_deref(), Some("gold"));
                assert_eq!(senior_category, None);
                assert_eq!(sub_category, "family");
                assert_eq!(children.len(), 2);
                assert_eq!(children[1].age, "4");
            }
            other => panic!("expected quote request, got {other:?}"),
        }
    }

    #[test]
    fn test_discriminator_precedence_is_pinned() {
        // The check order in `classify` must follow DISCRIMINATORS exactly;
        // reordering changes externally observable routing.
        assert_eq!(
            DISCRIMINATORS,
            ["enquiry", "infoAbout", "heardFrom", "planCategory"]
        );
        let data = map(json!({
            "enquiry": "x", "infoAbout": "y", "heardFrom": "z", "planCategory": "w"
        }));
        assert_eq!(classify(&data).unwrap().variant(), Variant::ExistingMember);

        let data = map(json!({
            "infoAbout": "y", "heardFrom": "z", "planCategory": "w"
        }));
        assert_eq!(
            classify(&data).unwrap().variant(),
            Variant::ProspectiveClient
        );
    }

    #[test]
    fn test_no_discriminator_fails() {
        let data = map(json!({ "firstName": "Jo", "message": "hi" }));
        assert_eq!(classify(&data), Err(ClassifyError::Unrecognised));
    }

    #[test]
    fn test_non_string_message_defaults_empty() {
        let data = map(json!({ "enquiry": "billing", "message": 42 }));
        assert_eq!(classify(&data).unwrap().contact().message, "");
    }
}
