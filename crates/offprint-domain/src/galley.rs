//! Galley (rendition) and galley file types

use crate::Localized;
use serde::{Deserialize, Serialize};

/// MIME type identifying PDF galleys
pub const PDF_FILE_TYPE: &str = "application/pdf";

/// The file backing a local galley, with its genre classification
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GalleyFile {
    pub genre_id: i64,
    pub names: Localized,
}

impl GalleyFile {
    pub fn new(genre_id: i64) -> Self {
        Self {
            genre_id,
            names: Localized::new(),
        }
    }

    /// Builder method to add a display name in one locale
    pub fn with_name(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.set(locale, name);
        self
    }
}

/// One rendition of a publication's content.
///
/// A galley is either backed by a local file or hosted remotely; the two
/// are mutually exclusive in practice but the model leaves enforcement to
/// classification.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Galley {
    pub id: i64,
    /// Identifier used when constructing front-end URLs
    pub best_id: String,
    pub locale: String,
    /// MIME type of the backing file, if any
    pub file_type: Option<String>,
    pub remote_url: Option<String>,
    /// DOI registered for this specific rendition
    pub doi: Option<String>,
    pub file: Option<GalleyFile>,
}

impl Galley {
    pub fn new(id: i64, best_id: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            id,
            best_id: best_id.into(),
            locale: locale.into(),
            file_type: None,
            remote_url: None,
            doi: None,
            file: None,
        }
    }

    /// Builder method to set the backing file's MIME type
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// Builder method to mark the galley as remotely hosted
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }

    /// Builder method to set the rendition DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Builder method to attach the backing file
    pub fn with_file(mut self, file: GalleyFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn is_pdf(&self) -> bool {
        self.file_type.as_deref() == Some(PDF_FILE_TYPE)
    }

    pub fn is_remote(&self) -> bool {
        self.remote_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
