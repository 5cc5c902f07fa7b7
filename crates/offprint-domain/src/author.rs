//! Contributor representation

use crate::Localized;
use serde::{Deserialize, Serialize};

/// An author of a publication, with name parts per locale
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub given_names: Localized,
    pub family_names: Localized,
    pub orcid: Option<String>,
}

impl Author {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a given/family pair in one locale
    pub fn with_name(
        mut self,
        locale: impl Into<String> + Clone,
        given: impl Into<String>,
        family: impl Into<String>,
    ) -> Self {
        self.given_names.set(locale.clone(), given);
        self.family_names.set(locale, family);
        self
    }

    /// Builder method to add a family name without a given name
    pub fn with_family_name(mut self, locale: impl Into<String>, family: impl Into<String>) -> Self {
        self.family_names.set(locale, family);
        self
    }

    /// Builder method to add an ORCID
    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        self.orcid = Some(orcid.into());
        self
    }

    /// Display name used when no name pair exists in the publication
    /// locale: "Given Family" from the first locale carrying a family name.
    pub fn full_name(&self) -> String {
        match self.family_names.first() {
            Some((locale, family)) => match self.given_names.get(locale) {
                Some(given) => format!("{} {}", given, family),
                None => family.to_string(),
            },
            None => String::new(),
        }
    }
}
