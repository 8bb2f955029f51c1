//! URL slugs for provider profile pages.

use crate::ProviderRecord;

/// Turn free text into a URL-safe slug: lower-case, trim, drop everything
/// outside `[a-z0-9\s-]`, collapse whitespace runs to a single hyphen, then
/// collapse hyphen runs. Idempotent.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut last_hyphen = false;
    for ch in kept.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !last_hyphen && !slug.is_empty() {
                slug.push('-');
                last_hyphen = true;
            }
        } else {
            slug.push(ch);
            last_hyphen = false;
        }
    }
    // A trailing separator can survive when the input ends in stripped chars.
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Profile slug for a provider: `dr-<surname>` with `-<suburb>` appended
/// when the suburb is known.
pub fn provider_slug(record: &ProviderRecord) -> String {
    let surname = slugify(&record.surname);
    let suburb = slugify(&record.suburb);
    if suburb.is_empty() {
        format!("dr-{surname}")
    } else {
        format!("dr-{surname}-{suburb}")
    }
}
