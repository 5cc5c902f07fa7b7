//! Domain types for the offprint journal publishing platform
//!
//! This crate provides the read-only records consumed by the export
//! pipelines:
//! - Publication/Submission: article metadata, page descriptors, galleys
//! - Galley: one rendition of the content (local file or remote link)
//! - Author: contributor with per-locale names and ORCID
//! - Issue, Journal: container metadata
//! - Localized: locale-keyed text values

pub mod author;
pub mod galley;
pub mod issue;
pub mod localized;
pub mod publication;

pub use author::*;
pub use galley::*;
pub use issue::*;
pub use localized::*;
pub use publication::*;
