//! Journal article node assembly
//!
//! One `journal_article` element is produced per PDF galley ordinal, plus
//! a base node carrying the publication-level DOI. The bibliographic
//! metadata is identical across the siblings; only the DOI/resource pair
//! embedded in the doi_data block changes with the ordinal.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use offprint_domain::{Author, Galley, Publication, Submission};
use quick_xml::escape::unescape;
use regex::Regex;

use crate::collections::{append_as_crawled_collections, append_text_mining_collection};
use crate::context::DepositContext;
use crate::galleys::{classify_galleys, ClassifiedGalleys};
use crate::xml::Element;

lazy_static! {
    // Crossref accepts no punctuation in first_page or last_page
    static ref NON_ALNUM: Regex = Regex::new(r"[^[:alnum:]]").unwrap();
    static ref MARKUP_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Build every `journal_article` node for one submission.
///
/// Returns N+1 sibling nodes where N is the PDF count over the full galley
/// list: the base node first, then one node per PDF ordinal in original
/// list order. Classification runs once and is shared by all of them.
pub fn build_article_nodes(ctx: &DepositContext, submission: &Submission) -> Vec<Element> {
    let publication = &submission.publication;
    let classified = classify_galleys(&publication.galleys, ctx.genres, &publication.locale);

    // N counts PDFs over the unfiltered list; an ordinal past the
    // classified set yields a node without a doi_data block.
    let pdf_count = publication.galleys.iter().filter(|galley| galley.is_pdf()).count();

    (0..=pdf_count)
        .map(|ordinal| build_article_node(ctx, submission, &classified, ordinal))
        .collect()
}

/// Build one `journal_article` node.
///
/// Ordinal 0 is the base node registering the publication DOI against the
/// article landing page; ordinals 1..=N register the matching PDF galley's
/// DOI against its download URL.
pub fn build_article_node(
    ctx: &DepositContext,
    submission: &Submission,
    classified: &ClassifiedGalleys,
    ordinal: usize,
) -> Element {
    let publication = &submission.publication;
    let locale = &publication.locale;

    let mut article = Element::new("journal_article")
        .with_attr("publication_type", "full_text")
        .with_attr("metadata_distribution_opts", "any");

    // titles
    let mut titles = Element::new("titles");
    titles.append(Element::with_text(
        "title",
        publication.titles.get(locale).unwrap_or_default(),
    ));
    if let Some(subtitle) = publication.subtitles.get(locale) {
        titles.append(Element::with_text("subtitle", subtitle));
    }
    article.append(titles);

    // contributors
    let mut contributors = Element::new("contributors");
    for (index, author) in publication.authors.iter().enumerate() {
        contributors.append(build_person_name(ctx, author, locale, index == 0));
    }
    article.append(contributors);

    // abstract
    if let Some(abstract_text) = publication.abstracts.get(locale) {
        let mut abstract_node = Element::new("jats:abstract");
        abstract_node.append(Element::with_text("jats:p", strip_markup(abstract_text)));
        article.append(abstract_node);
    }

    // publication date
    if let Some(date) = publication.date_published {
        article.append(build_publication_date(date));
    }

    // pages
    if let Some(pages) = build_pages(publication) {
        article.append(pages);
    }

    // license
    if let Some(license_url) = &publication.license_url {
        let mut program = Element::new("ai:program").with_attr("name", "AccessIndicators");
        program.append(Element::with_text("ai:license_ref", license_url));
        article.append(program);
    }

    // doi_data: the only part that varies across the sibling nodes
    let doi_data = match ordinal {
        0 => publication
            .doi
            .as_ref()
            .map(|doi| build_doi_data(doi, &ctx.routes.article_url(&submission.best_id))),
        _ => classified.pdf_at(ordinal).and_then(|galley| {
            galley.doi.as_ref().map(|doi| {
                let url = ctx.routes.download_url(&submission.best_id, &galley.best_id);
                build_doi_data(doi, &url)
            })
        }),
    };
    if let Some(mut doi_data) = doi_data {
        append_as_crawled_collections(&mut doi_data, ctx, submission, &classified.as_crawled());
        append_text_mining_collection(&mut doi_data, ctx, submission, &classified.text_mining());
        article.append(doi_data);
    }

    // component list (supplementary files)
    if !classified.supplementary.is_empty() {
        article.append(build_component_list(ctx, submission, &classified.supplementary));
    }

    article
}

/// `doi_data > doi + resource` block registering one DOI against a URL
pub fn build_doi_data(doi: &str, resource_url: &str) -> Element {
    let mut doi_data = Element::new("doi_data");
    doi_data.append(Element::with_text("doi", doi));
    doi_data.append(Element::with_text("resource", resource_url));
    doi_data
}

fn build_person_name(
    ctx: &DepositContext,
    author: &Author,
    locale: &str,
    is_first: bool,
) -> Element {
    let mut person = Element::new("person_name")
        .with_attr("contributor_role", "author")
        .with_attr("sequence", if is_first { "first" } else { "additional" });

    match (author.given_names.get(locale), author.family_names.get(locale)) {
        (Some(given), Some(family)) => {
            person.set_attr("language", ctx.locales.iso1(locale));
            person.append(Element::with_text("given_name", ucfirst(given)));
            person.append(Element::with_text("surname", ucfirst(family)));

            let mut alt_name = Element::new("alt-name");
            for (other_locale, family) in author.family_names.iter() {
                if other_locale == locale || family.is_empty() {
                    continue;
                }
                let mut name =
                    Element::new("name").with_attr("language", ctx.locales.iso1(other_locale));
                name.append(Element::with_text("surname", ucfirst(family)));
                if let Some(given) = author.given_names.get(other_locale) {
                    name.append(Element::with_text("given_name", ucfirst(given)));
                }
                alt_name.append(name);
            }
            if !alt_name.children().is_empty() {
                person.append(alt_name);
            }
        }
        _ => {
            person.append(Element::with_text("surname", ucfirst(&author.full_name())));
        }
    }

    if let Some(orcid) = &author.orcid {
        person.append(Element::with_text("ORCID", orcid));
    }
    person
}

/// `publication_date media_type="online"` with zero-padded month and day
pub(crate) fn build_publication_date(date: NaiveDate) -> Element {
    let mut node = Element::new("publication_date").with_attr("media_type", "online");
    node.append(Element::with_text("month", format!("{:02}", date.month())));
    node.append(Element::with_text("day", format!("{:02}", date.day())));
    node.append(Element::with_text("year", date.year().to_string()));
    node
}

/// Pages node per Crossref rules: the first range becomes first_page and
/// last_page, remaining ranges are joined into other_pages.
///
/// Any punctuation in the first or last page suppresses the element
/// entirely, other_pages included.
fn build_pages(publication: &Publication) -> Option<Element> {
    let mut ranges = publication.page_ranges();
    if ranges.is_empty() {
        return None;
    }
    let mut first_range = ranges.remove(0);
    let first_page = if first_range.is_empty() {
        String::new()
    } else {
        first_range.remove(0)
    };
    let last_page = if first_range.is_empty() {
        String::new()
    } else {
        first_range.remove(0)
    };

    // "0" is a real page number, only truly empty strings are absent
    if first_page.is_empty() || NON_ALNUM.is_match(&first_page) || NON_ALNUM.is_match(&last_page) {
        return None;
    }

    let mut pages = Element::new("pages");
    pages.append(Element::with_text("first_page", first_page));
    if !last_page.is_empty() {
        pages.append(Element::with_text("last_page", last_page));
    }
    let other_pages = ranges
        .iter()
        .map(|range| range.join("-"))
        .collect::<Vec<_>>()
        .join(",");
    if !other_pages.is_empty() {
        pages.append(Element::with_text("other_pages", other_pages));
    }
    Some(pages)
}

/// `component_list` of supplementary-file galleys, each registering its
/// own DOI against its download URL
fn build_component_list(
    ctx: &DepositContext,
    submission: &Submission,
    galleys: &[&Galley],
) -> Element {
    let mut component_list = Element::new("component_list");
    for galley in galleys {
        let mut component = Element::new("component").with_attr("parent_relation", "isPartOf");
        if let Some(title) = galley
            .file
            .as_ref()
            .and_then(|file| file.names.get(&galley.locale))
        {
            let mut titles = Element::new("titles");
            titles.append(Element::with_text("title", title));
            component.append(titles);
        }
        if let Some(doi) = &galley.doi {
            let url = ctx.routes.download_url(&submission.best_id, &galley.best_id);
            component.append(build_doi_data(doi, &url));
        }
        component_list.append(component);
    }
    component_list
}

/// Strip markup tags and decode entities, the platform's abstract
/// treatment. Re-escaping happens at serialization.
fn strip_markup(html: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(html, "");
    match unescape(&stripped) {
        Ok(text) => text.into_owned(),
        // malformed entities are kept verbatim
        Err(_) => stripped.into_owned(),
    }
}

/// Uppercase the first character, as the platform does for name parts
fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("einstein"), "Einstein");
        assert_eq!(ucfirst("Einstein"), "Einstein");
        assert_eq!(ucfirst(""), "");
        assert_eq!(ucfirst("éinstein"), "Éinstein");
    }

    #[test]
    fn test_strip_markup_removes_tags_and_decodes_entities() {
        assert_eq!(
            strip_markup("<p>Bread &amp; butter</p>"),
            "Bread & butter"
        );
        assert_eq!(strip_markup("no markup"), "no markup");
    }

    #[test]
    fn test_strip_markup_keeps_malformed_entities() {
        assert_eq!(strip_markup("a &unknown; b"), "a &unknown; b");
    }

    #[test]
    fn test_publication_date_is_zero_padded() {
        let node = build_publication_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(node.find("month").unwrap().text(), "03");
        assert_eq!(node.find("day").unwrap().text(), "05");
        assert_eq!(node.find("year").unwrap().text(), "2024");
        assert_eq!(node.attr("media_type"), Some("online"));
    }

    fn pages_node(pages: &str) -> Option<Element> {
        let mut publication = Publication::new("en_US");
        publication.pages = Some(pages.to_string());
        build_pages(&publication)
    }

    #[test]
    fn test_pages_first_and_last() {
        let node = pages_node("15-25").unwrap();
        assert_eq!(node.find("first_page").unwrap().text(), "15");
        assert_eq!(node.find("last_page").unwrap().text(), "25");
        assert!(node.find("other_pages").is_none());
    }

    #[test]
    fn test_pages_other_ranges_joined() {
        let node = pages_node("15-25,27,101-103").unwrap();
        assert_eq!(node.find("other_pages").unwrap().text(), "27,101-103");
    }

    #[test]
    fn test_pages_single_page_has_no_last_page() {
        let node = pages_node("42").unwrap();
        assert_eq!(node.find("first_page").unwrap().text(), "42");
        assert!(node.find("last_page").is_none());
    }

    #[test]
    fn test_punctuated_last_page_suppresses_element() {
        assert!(pages_node("12-1.5").is_none());
    }
}
