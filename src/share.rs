// SPDX-License-Identifier: MPL-2.0
//! Share links.
//!
//! A share link carries nothing but the diary identifier:
//! `scrapbook://open?diary=<id>`. Opening one looks the diary up in local
//! storage. Parsing is lenient: any URL with a `diary` query parameter is
//! accepted, and so is a bare identifier.

use crate::domain::diary::DiaryId;
use crate::error::{Error, Result};
use std::fmt;

/// Scheme and path of links produced by [`ShareLink`].
pub const LINK_BASE: &str = "scrapbook://open";

/// Name of the query parameter holding the diary identifier.
pub const QUERY_PARAM: &str = "diary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    diary_id: DiaryId,
}

impl ShareLink {
    #[must_use]
    pub fn new(diary_id: DiaryId) -> Self {
        Self { diary_id }
    }

    #[must_use]
    pub fn diary_id(&self) -> &DiaryId {
        &self.diary_id
    }

    #[must_use]
    pub fn into_diary_id(self) -> DiaryId {
        self.diary_id
    }

    /// Parses a share link, any URL carrying a `diary` query parameter, or a
    /// bare diary identifier.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let invalid = || Error::InvalidShareLink(input.to_string());

        let raw_id = match input.split_once('?') {
            Some((_, query)) => query_value(query, QUERY_PARAM).ok_or_else(invalid)?,
            None if input.contains("://") => return Err(invalid()),
            None => input,
        };

        DiaryId::parse(raw_id).map(Self::new).ok_or_else(invalid)
    }
}

/// Value of `name` in a `k=v&k=v` query string, ignoring any `#fragment`.
fn query_value<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LINK_BASE}?{QUERY_PARAM}={}", self.diary_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> DiaryId {
        DiaryId::parse(raw).unwrap()
    }

    #[test]
    fn link_format_carries_id() {
        let link = ShareLink::new(id("k3x9Qa_b-2"));
        assert_eq!(link.to_string(), "scrapbook://open?diary=k3x9Qa_b-2");
    }

    #[test]
    fn parse_accepts_own_links() {
        let link = ShareLink::new(id("abc123"));
        assert_eq!(ShareLink::parse(&link.to_string()).unwrap(), link);
    }

    #[test]
    fn parse_accepts_web_style_urls() {
        let parsed = ShareLink::parse("https://example.org/?lang=en&diary=xyz#top").unwrap();
        assert_eq!(parsed.diary_id().as_str(), "xyz");
    }

    #[test]
    fn parse_accepts_bare_id() {
        let parsed = ShareLink::parse("  plainId  ").unwrap();
        assert_eq!(parsed.diary_id().as_str(), "plainId");
    }

    #[test]
    fn parse_rejects_missing_parameter() {
        assert!(matches!(
            ShareLink::parse("scrapbook://open?page=2"),
            Err(Error::InvalidShareLink(_))
        ));
        assert!(ShareLink::parse("scrapbook://open").is_err());
    }

    #[test]
    fn parse_rejects_unsafe_ids() {
        assert!(ShareLink::parse("scrapbook://open?diary=../../etc").is_err());
        assert!(ShareLink::parse("scrapbook://open?diary=").is_err());
        assert!(ShareLink::parse("").is_err());
    }
}
