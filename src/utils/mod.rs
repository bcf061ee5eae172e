//! Helper functions for link parsing and inspection.
//!
//! - [`url_normalizer`] - Input parsing and URL normalization
//! - [`extract_domain`] - Host extraction and pattern matching
//! - [`query`] - Query string and hash-route parameter lookup

pub mod extract_domain;
pub mod query;
pub mod url_normalizer;
