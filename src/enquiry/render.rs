//! Render enquiry emails as HTML.
//!
//! Two documents per submission: an operational notification (per-variant
//! template) and a variant-independent acknowledgement for the submitter.
//! Pure string building, no I/O.

use crate::enquiry::classify::{Contact, EnquiryForm};

/// Render the operational notification for a classified form.
///
/// `display_to` is the "Submitted to" display line only; the actual envelope
/// recipient is decided by the dispatch routing table and may differ.
pub fn notification_html(form: &EnquiryForm, display_to: &str) -> String {
    let contact = form.contact();
    let mut html = String::with_capacity(1024);

    html.push_str("<html><body style=\"font-family: Arial, sans-serif;\">");
    html.push_str(&format!("<h2>{}</h2>", esc(heading(form))));
    push_line(&mut html, "Submitted to", display_to);
    push_line(
        &mut html,
        "Name",
        &format!("{} {}", contact.first_name, contact.last_name),
    );
    push_line(&mut html, "Phone", &contact.phone);
    push_line(&mut html, "Email", &contact.email);

    match form {
        EnquiryForm::ExistingMember { enquiry, .. } => {
            push_line(&mut html, "Enquiry type", enquiry);
        }
        EnquiryForm::ProspectiveClient {
            info_about,
            heard_from,
            ..
        } => {
            push_line(&mut html, "Information needed", info_about);
            push_line(&mut html, "Heard about us from", heard_from);
        }
        EnquiryForm::QuoteRequest {
            plan_category,
            senior_category,
            tier,
            sub_category,
            children,
            ..
        } => {
            push_line(&mut html, "Plan category", plan_category);
            if let Some(senior) = senior_category {
                push_line(&mut html, "Senior category", senior);
            }
            if let Some(tier) = tier {
                push_line(&mut html, "Tier", tier);
            }
            push_line(&mut html, "Cover for", sub_category);
            // Children are only relevant on family cover.
            if sub_category == "family" && !children.is_empty() {
                html.push_str("<p><strong>Children:</strong></p><ul>");
                for child in children {
                    html.push_str(&format!(
                        "<li>{} (Age: {})</li>",
                        esc(&child.name),
                        esc(&child.age)
                    ));
                }
                html.push_str("</ul>");
            }
        }
    }

    html.push_str(&format!(
        "<p><strong>Message:</strong><br />{}</p>",
        nl2br(&contact.message)
    ));
    html.push_str("</body></html>");
    html
}

/// Render the acknowledgement sent back to the submitter. Same template for
/// every variant.
pub fn acknowledgement_html(form: &EnquiryForm) -> String {
    let Contact { first_name, .. } = form.contact();
    format!(
        concat!(
            "<html><body style=\"font-family: Arial, sans-serif;\">",
            "<h2>Thank you for contacting Vitalis</h2>",
            "<p>Dear {name},</p>",
            "<p>We have received your enquiry and one of our consultants will ",
            "be in touch within one business day.</p>",
            "<p>Kind regards,<br />The Vitalis Team</p>",
            "</body></html>"
        ),
        name = esc(first_name)
    )
}

/// Subject line for the operational notification.
pub fn notification_subject(form: &EnquiryForm) -> String {
    let contact = form.contact();
    let full_name = format!("{} {}", contact.first_name, contact.last_name);
    match form {
        EnquiryForm::ExistingMember { enquiry, .. } => {
            format!("[EXISTING MEMBER] {full_name} - {enquiry}")
        }
        EnquiryForm::ProspectiveClient { .. } => format!("[NEW CLIENT] {full_name}"),
        EnquiryForm::QuoteRequest { plan_category, .. } => {
            format!("[QUOTE REQUEST] {full_name} - {plan_category}")
        }
    }
}

/// Subject line for the acknowledgement.
pub fn acknowledgement_subject() -> String {
    "Thank you for contacting Vitalis".to_string()
}

fn heading(form: &EnquiryForm) -> &'static str {
    match form {
        EnquiryForm::ExistingMember { .. } => "Existing Member Enquiry",
        EnquiryForm::ProspectiveClient { .. } => "New Client Enquiry",
        EnquiryForm::QuoteRequest { .. } => "Quote Request",
    }
}

fn push_line(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>",
        esc(label),
        esc(value)
    ));
}

/// Escape text for inclusion in HTML.
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape, then convert newlines to `<br />`.
fn nl2br(text: &str) -> String {
    esc(text).replace("\r\n", "<br />").replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::classify::{ChildEntry, Contact};

    fn contact() -> Contact {
        Contact {
            first_name: "Jo".into(),
            last_name: "Soap".into(),
            phone: "0810000000".into(),
            email: "jo@x.com".into(),
            message: "Line one\nLine two".into(),
        }
    }

    #[test]
    fn test_existing_member_subject() {
        let form = EnquiryForm::ExistingMember {
            contact: contact(),
            enquiry: "billing".into(),
        };
        assert_eq!(
            notification_subject(&form),
            "[EXISTING MEMBER] Jo Soap - billing"
        );
    }

    #[test]
    fn test_notification_carries_display_recipient_and_message() {
        let form = EnquiryForm::ExistingMember {
            contact: contact(),
            enquiry: "billing".into(),
        };
        let html = notification_html(&form, "enquiries@vitalis.example");
        assert!(html.contains("Submitted to"));
        assert!(html.contains("enquiries@vitalis.example"));
        assert!(html.contains("Line one<br />Line two"));
    }

    #[test]
    fn test_children_only_rendered_for_family_cover() {
        let children = vec![ChildEntry {
            name: "Ana".into(),
            age: "7".into(),
        }];
        let single = EnquiryForm::QuoteRequest {
            contact: contact(),
            plan_category: "hospital".into(),
            senior_category: None,
            tier: None,
            sub_category: "single".into(),
            children: children.clone(),
        };
        // Populated children list, but not family cover: never rendered.
        assert!(!notification_html(&single, "x").contains("Children"));

        let family = EnquiryForm::QuoteRequest {
            contact: contact(),
            plan_category: "hospital".into(),
            senior_category: None,
            tier: None,
            sub_category: "family".into(),
            children,
        };
        let html = notification_html(&family, "x");
        assert!(html.contains("Children"));
        assert!(html.contains("Ana (Age: 7)"));
    }

    #[test]
    fn test_optional_quote_lines_omitted_when_absent() {
        let form = EnquiryForm::QuoteRequest {
            contact: contact(),
            plan_category: "hospital".into(),
            senior_category: None,
            tier: None,
            sub_category: "single".into(),
            children: vec![],
        };
        let html = notification_html(&form, "x");
        assert!(!html.contains("Senior category"));
        assert!(!html.contains("Tier"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut c = contact();
        c.message = "<script>alert(1)</script>".into();
        let form = EnquiryForm::ExistingMember {
            contact: c,
            enquiry: "billing".into(),
        };
        let html = notification_html(&form, "x");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_acknowledgement_addresses_first_name() {
        let form = EnquiryForm::ExistingMember {
            contact: contact(),
            enquiry: "billing".into(),
        };
        assert!(acknowledgement_html(&form).contains("Dear Jo,"));
    }
}
