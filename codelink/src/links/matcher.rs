//! Link Matcher
//!
//! Resolves a component's canonical key to a design-tool URL.
//!
//! Matching runs in two passes and the first hit of a pass wins:
//! 1. exact: record key equals the target key;
//! 2. partial: record key is a substring of the target key or the reverse.
//!
//! Ties are broken by table order. Published bindings depend on which record
//! wins, so this must not become a best-overall-match search.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::links::schema::{ComponentRecord, LinkTable};
use crate::parser::naming::{normalize_key, CanonicalKey};

#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("file not found: {0}")]
    Missing(String),
    #[error("Failed to read link table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse link table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Partial,
}

/// A resolved link: the winning record and how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkMatch<'a> {
    pub record: &'a ComponentRecord,
    pub kind: MatchKind,
}

impl<'a> LinkMatch<'a> {
    pub fn url(&self) -> &'a str {
        &self.record.url
    }
}

/// Two-pass lookup over `(key, record)` pairs in table order.
///
/// An empty key is a substring of every key, so a symbol-only record name
/// (or file name) takes the partial pass whenever nothing matches exactly.
fn lookup<'k, 'a, I>(mut entries: I, target: &str) -> Option<LinkMatch<'a>>
where
    I: Iterator<Item = (&'k str, &'a ComponentRecord)> + Clone,
{
    if let Some((_, record)) = entries.clone().find(|(key, _)| *key == target) {
        return Some(LinkMatch {
            record,
            kind: MatchKind::Exact,
        });
    }

    entries
        .find(|(key, _)| key.contains(target) || target.contains(key))
        .map(|(_, record)| LinkMatch {
            record,
            kind: MatchKind::Partial,
        })
}

/// Find the URL for `target_key` in `records`, normalizing record names on the fly.
///
/// Returns `None` when nothing matches; callers treat that as "missing".
pub fn find_url<'a>(records: &'a [ComponentRecord], target_key: &str) -> Option<&'a str> {
    let keys: Vec<CanonicalKey> = records.iter().map(|r| normalize_key(&r.name)).collect();
    lookup(
        keys.iter().map(String::as_str).zip(records.iter()),
        target_key,
    )
    .map(|m| m.url())
}

/// Matcher over a loaded link table with record names normalized once up front.
pub struct LinkMatcher {
    records: Vec<ComponentRecord>,
    keys: Vec<CanonicalKey>,
}

impl LinkMatcher {
    pub fn new(table: LinkTable) -> Self {
        let keys = table
            .components
            .iter()
            .map(|r| normalize_key(&r.name))
            .collect();
        Self {
            records: table.components,
            keys,
        }
    }

    /// Load a link table from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, MatcherError> {
        if !path.is_file() {
            return Err(MatcherError::Missing(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let table = LinkTable::from_json(&content)?;
        tracing::info!("Loaded {} link records from {:?}", table.len(), path);
        Ok(Self::new(table))
    }

    /// Resolve a canonical key, reporting which record won and by which pass.
    pub fn find(&self, target_key: &str) -> Option<LinkMatch<'_>> {
        let found = lookup(
            self.keys.iter().map(String::as_str).zip(self.records.iter()),
            target_key,
        );
        if let Some(ref m) = found {
            tracing::debug!(
                "Key {:?} matched record {:?} ({:?})",
                target_key,
                m.record.name,
                m.kind
            );
        }
        found
    }

    /// Resolve a canonical key to its URL.
    pub fn find_url(&self, target_key: &str) -> Option<&str> {
        self.find(target_key).map(|m| m.url())
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, &str)]) -> Vec<ComponentRecord> {
        pairs
            .iter()
            .map(|(name, url)| ComponentRecord::new(*name, *url))
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let recs = records(&[("Button", "u1"), ("Card", "u2")]);
        assert_eq!(find_url(&recs, "card"), Some("u2"));
    }

    #[test]
    fn test_exact_beats_earlier_partial() {
        // "Dropdown Menu Item" partially matches first, but the exact record wins
        let recs = records(&[("Dropdown Menu Item", "partial"), ("Dropdown Menu", "exact")]);
        assert_eq!(find_url(&recs, "dropdown-menu"), Some("exact"));
    }

    #[test]
    fn test_partial_first_in_order_wins() {
        let recs = records(&[("Alert Dialog", "first"), ("Dialog Content", "second")]);
        assert_eq!(find_url(&recs, "dialog"), Some("first"));
    }

    #[test]
    fn test_partial_record_inside_target() {
        let recs = records(&[("Toggle", "u1")]);
        assert_eq!(find_url(&recs, "toggle-group"), Some("u1"));
    }

    #[test]
    fn test_no_match() {
        let recs = records(&[("Button", "u1")]);
        assert_eq!(find_url(&recs, "sidebar"), None);
        assert_eq!(find_url(&[], "button"), None);
    }

    #[test]
    fn test_empty_record_key_takes_partial_pass() {
        let recs = records(&[("🎨", "emoji"), ("Card", "card")]);
        assert_eq!(find_url(&recs, "button"), Some("emoji"));
        // exact still precedes the empty-key partial hit
        assert_eq!(find_url(&recs, "card"), Some("card"));
    }

    #[test]
    fn test_empty_target_key_matches_first_record() {
        let recs = records(&[("Card", "card"), ("Button", "button")]);
        assert_eq!(find_url(&recs, ""), Some("card"));

        let matcher = LinkMatcher::new(LinkTable::new(recs));
        assert_eq!(matcher.find("").map(|m| m.kind), Some(MatchKind::Partial));
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let recs = records(&[("Badge", "one"), ("badge", "two")]);
        assert_eq!(find_url(&recs, "badge"), Some("one"));
    }

    #[test]
    fn test_matcher_reports_kind() {
        let matcher = LinkMatcher::new(LinkTable::new(records(&[
            ("Input OTP", "otp"),
            ("Input", "input"),
        ])));

        let exact = matcher.find("input").unwrap();
        assert_eq!(exact.kind, MatchKind::Exact);
        assert_eq!(exact.url(), "input");

        let partial = matcher.find("input-otp-slot").unwrap();
        assert_eq!(partial.kind, MatchKind::Partial);
        assert_eq!(partial.record.name, "Input OTP");
    }

    #[test]
    fn test_matcher_agrees_with_find_url() {
        let recs = records(&[("Navigation Menu", "nav"), ("Menu", "menu"), ("Menubar", "bar")]);
        let matcher = LinkMatcher::new(LinkTable::new(recs.clone()));
        for key in ["menu", "menubar", "navigation-menu", "context-menu", "tabs"] {
            assert_eq!(matcher.find_url(key), find_url(&recs, key), "key {}", key);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = LinkMatcher::load_from_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(MatcherError::Missing(_))));
    }
}
