//! Design-tool link table and the matcher that resolves component keys
//! against it.
//!
//! ```text
//! component-links.json ──▶ LinkTable ──▶ LinkMatcher ──▶ Option<LinkMatch>
//!                                            ▲
//!                       normalize_key(base) ─┘
//! ```

pub mod matcher;
pub mod schema;

// Re-exports for convenience
pub use matcher::{find_url, LinkMatch, LinkMatcher, MatchKind, MatcherError};
pub use schema::{ComponentRecord, LinkTable};
