//! Publication and submission models

use crate::{Author, Galley, Localized};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The published version of a submission: all article metadata plus the
/// ordered list of galleys carrying the content.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    /// Primary locale of the article
    pub locale: String,
    pub titles: Localized,
    pub subtitles: Localized,
    pub authors: Vec<Author>,
    pub abstracts: Localized,
    pub date_published: Option<NaiveDate>,
    /// Free-form page descriptor, e.g. "15-25,27,101-103"
    pub pages: Option<String>,
    pub license_url: Option<String>,
    /// Article-level DOI
    pub doi: Option<String>,
    pub issue_id: Option<i64>,
    pub galleys: Vec<Galley>,
}

impl Publication {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            titles: Localized::new(),
            subtitles: Localized::new(),
            authors: Vec::new(),
            abstracts: Localized::new(),
            date_published: None,
            pages: None,
            license_url: None,
            doi: None,
            issue_id: None,
            galleys: Vec::new(),
        }
    }

    /// Parse the page descriptor into ranges: the descriptor is split on
    /// commas, each range on hyphens.
    ///
    /// `"15-25,27,101-103"` becomes `[["15","25"], ["27"], ["101","103"]]`.
    pub fn page_ranges(&self) -> Vec<Vec<String>> {
        let pages = match &self.pages {
            Some(pages) if !pages.trim().is_empty() => pages,
            _ => return Vec::new(),
        };
        pages
            .split(',')
            .map(|range| range.split('-').map(|page| page.trim().to_string()).collect())
            .collect()
    }
}

/// A submission with its current publication
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: i64,
    /// Identifier used when constructing front-end URLs
    pub best_id: String,
    pub publication: Publication,
}

impl Submission {
    pub fn new(id: i64, best_id: impl Into<String>, publication: Publication) -> Self {
        Self {
            id,
            best_id: best_id.into(),
            publication,
        }
    }
}
