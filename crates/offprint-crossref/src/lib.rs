//! Crossref DOI deposit generation for offprint journal articles
//!
//! Converts platform domain records into Crossref 4.3.6 deposit XML. The
//! journal registers a DOI per PDF rendition, so one `journal_article`
//! node is produced per PDF galley ordinal - identical bibliographic
//! metadata, but each carrying its own galley's DOI and download URL in
//! the doi_data block - plus a base node for the publication-level DOI.
//!
//! The crate performs no I/O: URL construction, genre resolution and
//! locale mapping are injected through the traits in [`context`], and the
//! result is an in-memory element tree serialized to a string.

pub mod article;
pub mod collections;
pub mod context;
pub mod deposit;
pub mod error;
pub mod galleys;
pub mod xml;

pub use article::{build_article_node, build_article_nodes, build_doi_data};
pub use collections::{append_as_crawled_collections, append_text_mining_collection};
pub use context::{
    CachedIssueLookup, DefaultLocaleMap, DepositContext, GenreLookup, IssueLookup, LocaleMap,
    RouteResolver,
};
pub use deposit::{build_deposit, DepositHead};
pub use error::DepositError;
pub use galleys::{classify_galleys, ClassifiedGalleys};
pub use xml::Element;
