//! Galley classification for deposit assembly
//!
//! Classification runs once per article and is shared by every sibling
//! `journal_article` node; only the selected PDF ordinal differs between
//! them.

use offprint_domain::Galley;

use crate::context::GenreLookup;

/// Galleys of one publication partitioned for deposit assembly.
///
/// Holds borrowed views into the publication's galley list; classification
/// never copies galley records.
#[derive(Debug, Default)]
pub struct ClassifiedGalleys<'a> {
    /// Full-text galleys backed by a local file
    pub primary: Vec<&'a Galley>,
    /// Subset of `primary` that are PDFs, in original list order
    pub pdfs: Vec<&'a Galley>,
    /// Externally hosted galleys
    pub remote: Vec<&'a Galley>,
    /// Supplementary-file galleys carrying their own DOI
    pub supplementary: Vec<&'a Galley>,
    /// First PDF in the publication's own locale
    pub preferred_pdf: Option<&'a Galley>,
}

/// Partition a publication's galleys.
///
/// Remote galleys are kept apart from local ones. A local galley without a
/// backing file is unresolvable and falls out of every category.
/// Supplementary files only qualify for the component list when they carry
/// a DOI; supplementary files without one are dropped.
pub fn classify_galleys<'a>(
    galleys: &'a [Galley],
    genres: &dyn GenreLookup,
    locale: &str,
) -> ClassifiedGalleys<'a> {
    let mut classified = ClassifiedGalleys::default();
    for galley in galleys {
        if galley.is_remote() {
            classified.remote.push(galley);
            continue;
        }
        let Some(file) = &galley.file else {
            continue;
        };
        if genres.is_supplementary(file.genre_id) {
            if galley.doi.is_some() {
                classified.supplementary.push(galley);
            }
        } else {
            classified.primary.push(galley);
            if galley.is_pdf() {
                if classified.preferred_pdf.is_none() && galley.locale == locale {
                    classified.preferred_pdf = Some(galley);
                }
                classified.pdfs.push(galley);
            }
        }
    }
    classified
}

impl<'a> ClassifiedGalleys<'a> {
    /// Galleys eligible for the crawler-based collection, by priority:
    /// the PDF in the article locale, else the first PDF, else every
    /// primary galley.
    pub fn as_crawled(&self) -> Vec<&'a Galley> {
        if let Some(preferred) = self.preferred_pdf {
            vec![preferred]
        } else if let Some(first) = self.pdfs.first() {
            vec![first]
        } else {
            self.primary.clone()
        }
    }

    /// Galleys eligible for the text-mining collection: primary galleys
    /// followed by remote ones.
    pub fn text_mining(&self) -> Vec<&'a Galley> {
        let mut galleys = self.primary.clone();
        galleys.extend(self.remote.iter().copied());
        galleys
    }

    /// The `ordinal`-th PDF (1-based) in original list order
    pub fn pdf_at(&self, ordinal: usize) -> Option<&'a Galley> {
        if ordinal == 0 {
            return None;
        }
        self.pdfs.get(ordinal - 1).copied()
    }
}
