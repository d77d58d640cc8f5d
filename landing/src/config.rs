//! Site-wide constants and document metadata.

use crate::error::LandingError;
use web_sys::{Document, HtmlHeadElement};

/// Version string shown in the footer (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const BRAND: &str = "ScrapeAi";

/// Static page metadata, written into `<head>` at startup.
#[derive(Debug, Clone, Copy)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub social_description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub twitter_card: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    title: "ScrapeAi - Intelligent Web Scraping Made Simple",
    description: "Extract data from any website with the power of AI. No coding required, just describe what you need and let ScrapeAi do the rest.",
    social_description: "Extract data from any website with the power of AI. No coding required.",
    keywords: &["web scraping", "AI", "data extraction", "automation", "no-code"],
    author: "ScrapeAi Team",
    url: "https://scrapeai.com",
    site_name: BRAND,
    twitter_card: "summary_large_image",
};

/// One `<meta>` tag: selector attribute (`name` or `property`), key, content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: &'static str,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: "name",
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: "property",
            key,
            content: content.into(),
        }
    }
}

impl SiteMeta {
    pub fn tags(&self) -> Vec<MetaTag> {
        vec![
            MetaTag::name("description", self.description),
            MetaTag::name("keywords", self.keywords.join(", ")),
            MetaTag::name("author", self.author),
            MetaTag::name("creator", self.site_name),
            MetaTag::name("publisher", self.site_name),
            MetaTag::name("robots", "index, follow"),
            MetaTag::property("og:title", self.title),
            MetaTag::property("og:description", self.social_description),
            MetaTag::property("og:url", self.url),
            MetaTag::property("og:site_name", self.site_name),
            MetaTag::property("og:type", "website"),
            MetaTag::name("twitter:card", self.twitter_card),
            MetaTag::name("twitter:title", self.title),
            MetaTag::name("twitter:description", self.social_description),
        ]
    }
}

/// Set the document title and upsert every meta tag.
pub fn apply_document_meta(meta: &SiteMeta) -> Result<(), LandingError> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;
    let head = document.head().ok_or(LandingError::MissingElement("head"))?;

    document.set_title(meta.title);
    for tag in meta.tags() {
        upsert_meta(&document, &head, &tag)?;
    }
    Ok(())
}

fn upsert_meta(document: &Document, head: &HtmlHeadElement, tag: &MetaTag) -> Result<(), LandingError> {
    let selector = format!("meta[{}=\"{}\"]", tag.attr, tag.key);
    let element = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute(tag.attr, tag.key)?;
            head.append_child(&created)?;
            created
        }
    };
    element.set_attribute("content", &tag.content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_are_comma_joined() {
        let tags = SITE.tags();
        let keywords = tags.iter().find(|t| t.key == "keywords").unwrap();
        assert_eq!(
            keywords.content,
            "web scraping, AI, data extraction, automation, no-code"
        );
    }

    #[test]
    fn open_graph_uses_property_attribute() {
        let tags = SITE.tags();
        let og: Vec<_> = tags.iter().filter(|t| t.key.starts_with("og:")).collect();
        assert_eq!(og.len(), 5);
        assert!(og.iter().all(|t| t.attr == "property"));
    }

    #[test]
    fn tag_keys_are_unique() {
        let tags = SITE.tags();
        let mut keys: Vec<_> = tags.iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), tags.len());
    }

    #[test]
    fn version_has_prefix() {
        assert!(VERSION.starts_with('v'));
    }
}
