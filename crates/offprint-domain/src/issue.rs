//! Issue and journal container metadata

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A journal issue, as consumed by the deposit's issue node
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: i64,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub year: Option<i32>,
    pub date_published: Option<NaiveDate>,
}

impl Issue {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            volume: None,
            number: None,
            year: None,
            date_published: None,
        }
    }

    /// Builder method to set volume and number
    pub fn with_numbering(
        mut self,
        volume: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        self.volume = Some(volume.into());
        self.number = Some(number.into());
        self
    }

    /// Builder method to set the publication date
    pub fn with_date_published(mut self, date: NaiveDate) -> Self {
        self.date_published = Some(date);
        self
    }
}

/// Journal-level metadata for the deposit head
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Journal {
    pub name: String,
    pub abbreviation: Option<String>,
    pub issn: Option<String>,
    pub eissn: Option<String>,
}

impl Journal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            issn: None,
            eissn: None,
        }
    }

    /// Builder method to set the print ISSN
    pub fn with_issn(mut self, issn: impl Into<String>) -> Self {
        self.issn = Some(issn.into());
        self
    }

    /// Builder method to set the electronic ISSN
    pub fn with_eissn(mut self, eissn: impl Into<String>) -> Self {
        self.eissn = Some(eissn.into());
        self
    }
}
