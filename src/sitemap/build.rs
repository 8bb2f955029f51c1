//! Build sitemap XML documents per the sitemap protocol
//! (<https://www.sitemaps.org/protocol.html>).

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::directory::slug::provider_slug;
use crate::ProviderRecord;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap change frequency hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// One `<url>` element of a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

/// Static marketing pages in the legacy full sitemap, with their preset
/// change frequency and priority.
const STATIC_PAGES: [(&str, ChangeFreq, &str); 6] = [
    ("/", ChangeFreq::Daily, "1.0"),
    ("/plans", ChangeFreq::Weekly, "0.9"),
    ("/about-us", ChangeFreq::Monthly, "0.7"),
    ("/faq", ChangeFreq::Monthly, "0.6"),
    ("/contact", ChangeFreq::Monthly, "0.6"),
    ("/directory", ChangeFreq::Daily, "0.9"),
];

/// Directory sitemap: one entry per listable provider, addressed by profile
/// slug, plus a fixed entry for the directory index page.
pub fn directory_sitemap(base_url: &str, rows: &[ProviderRecord]) -> Result<String> {
    let today = Utc::now().date_naive();
    let mut entries = vec![SitemapEntry {
        loc: format!("{base_url}/directory"),
        lastmod: today,
        changefreq: ChangeFreq::Daily,
        priority: "0.9",
    }];

    for row in rows.iter().filter(|r| r.is_listable()) {
        entries.push(SitemapEntry {
            loc: format!("{base_url}/directory/{}", provider_slug(row)),
            lastmod: lastmod_date(row, today),
            changefreq: ChangeFreq::Monthly,
            priority: "0.8",
        });
    }

    write_urlset(&entries)
}

/// Legacy full sitemap: the static page list followed by every provider row
/// (no quality filtering), addressed by raw identifier.
pub fn pages_sitemap(base_url: &str, rows: &[ProviderRecord]) -> Result<String> {
    let today = Utc::now().date_naive();
    let mut entries: Vec<SitemapEntry> = STATIC_PAGES
        .iter()
        .map(|&(path, freq, priority)| SitemapEntry {
            loc: format!("{base_url}{path}"),
            lastmod: today,
            changefreq: freq,
            priority,
        })
        .collect();

    for row in rows {
        entries.push(SitemapEntry {
            loc: format!("{base_url}/directory/{}", row.id),
            lastmod: lastmod_date(row, today),
            changefreq: ChangeFreq::Monthly,
            priority: "0.5",
        });
    }

    write_urlset(&entries)
}

/// Sitemap index listing the two sub-sitemaps, stamped with the current date.
pub fn sitemap_index(base_url: &str) -> Result<String> {
    let today = Utc::now().date_naive();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("sitemapindex");
    root.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(root))?;

    for endpoint in ["/api/sitemap-pages", "/api/sitemap-directory"] {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        write_text_element(&mut writer, "loc", &format!("{base_url}{endpoint}"))?;
        write_text_element(&mut writer, "lastmod", &today.to_string())?;
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// The row's update timestamp truncated to a calendar date, else `fallback`.
fn lastmod_date(row: &ProviderRecord, fallback: NaiveDate) -> NaiveDate {
    let Some(raw) = row.updated_at.as_deref() else {
        return fallback;
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive();
    }
    // Plain `YYYY-MM-DD...` timestamps from the legacy import.
    if let Some(prefix) = raw.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return d;
        }
    }
    fallback
}

/// Serialize entries as a `<urlset>` document.
fn write_urlset(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("urlset");
    root.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(root))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        write_text_element(&mut writer, "lastmod", &entry.lastmod.to_string())?;
        write_text_element(&mut writer, "changefreq", entry.changefreq.as_str())?;
        write_text_element(&mut writer, "priority", entry.priority)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
