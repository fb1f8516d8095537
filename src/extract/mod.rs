//! Heuristic field extractors over raw markup text.
//!
//! The guide has no guaranteed schema, so no DOM is built: each extractor
//! runs ordered pattern attempts (first match wins) with a fallback, which
//! holds up better against this source than a strict parser would.

pub mod catalog;
pub mod description;
pub mod images;
pub mod ingress;
pub mod links;
pub mod title;

// ── Tests ──
