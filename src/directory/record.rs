//! Row shape of the remote provider-directory table.
//!
//! The table is a legacy import and most column names are upper-case with
//! embedded spaces; newer columns are lower-case. Serde renames keep the
//! Rust side conventional. Every field defaults so that projected fetches
//! (a column subset) still deserialize.

use serde::{Deserialize, Serialize};

/// One provider row, as returned by the directory table. Read-only here;
/// the table is owned by the upstream practice-management system.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(rename = "DOCTOR SURNAME", default)]
    pub surname: String,
    #[serde(rename = "SUBURB", default)]
    pub suburb: String,
    #[serde(rename = "PROVINCE", default)]
    pub province: String,
    #[serde(default)]
    pub profession: String,
    #[serde(rename = "TELEPHONE", default)]
    pub telephone: String,
    #[serde(rename = "EMAIL", default)]
    pub email: String,
}

impl ProviderRecord {
    /// Listing quality filter: a row qualifies for the public directory
    /// sitemap only with a surname, a profession, and at least one of
    /// suburb/province to locate it.
    pub fn is_listable(&self) -> bool {
        !self.surname.trim().is_empty()
            && !self.profession.trim().is_empty()
            && (!self.suburb.trim().is_empty() || !self.province.trim().is_empty())
    }
}
