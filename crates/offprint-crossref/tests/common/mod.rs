//! Shared fixtures for deposit integration tests

use offprint_crossref::{DefaultLocaleMap, DepositContext, GenreLookup, RouteResolver};
use offprint_domain::{Author, Galley, GalleyFile, Publication, Submission, PDF_FILE_TYPE};

/// Genre id the test genre lookup treats as supplementary
pub const SUPPLEMENTARY_GENRE: i64 = 2;

pub struct TestRoutes;

impl RouteResolver for TestRoutes {
    fn article_url(&self, submission_best_id: &str) -> String {
        format!("https://journal.example.org/article/view/{}", submission_best_id)
    }

    fn download_url(&self, submission_best_id: &str, galley_best_id: &str) -> String {
        format!(
            "https://journal.example.org/article/download/{}/{}",
            submission_best_id, galley_best_id
        )
    }
}

pub struct TestGenres;

impl GenreLookup for TestGenres {
    fn is_supplementary(&self, genre_id: i64) -> bool {
        genre_id == SUPPLEMENTARY_GENRE
    }
}

static ROUTES: TestRoutes = TestRoutes;
static GENRES: TestGenres = TestGenres;
static LOCALES: DefaultLocaleMap = DefaultLocaleMap;

pub fn test_context() -> DepositContext<'static> {
    DepositContext::new(&ROUTES, &GENRES, &LOCALES)
}

/// PDF galley with a registered DOI, backed by a primary-text file
pub fn pdf_galley(id: i64, locale: &str) -> Galley {
    Galley::new(id, format!("g{}", id), locale)
        .with_file_type(PDF_FILE_TYPE)
        .with_file(GalleyFile::new(1))
        .with_doi(format!("10.1234/galley.{}", id))
}

/// Non-PDF primary-text galley
pub fn html_galley(id: i64, locale: &str) -> Galley {
    Galley::new(id, format!("g{}", id), locale)
        .with_file_type("text/html")
        .with_file(GalleyFile::new(1))
}

/// Supplementary-file galley with its own DOI
#[allow(dead_code)]
pub fn supplementary_galley(id: i64, locale: &str) -> Galley {
    Galley::new(id, format!("g{}", id), locale)
        .with_file_type("application/zip")
        .with_file(GalleyFile::new(SUPPLEMENTARY_GENRE).with_name(locale, "Dataset"))
        .with_doi(format!("10.1234/supp.{}", id))
}

/// Submission with full metadata and the given galleys
pub fn submission_with_galleys(galleys: Vec<Galley>) -> Submission {
    let mut publication = Publication::new("en_US");
    publication.titles.set("en_US", "The Electrodynamics of Moving Bodies");
    publication
        .authors
        .push(Author::new().with_name("en_US", "Albert", "Einstein"));
    publication.doi = Some("10.1234/article.1".to_string());
    publication.pages = Some("15-25".to_string());
    publication.license_url = Some("https://creativecommons.org/licenses/by/4.0".to_string());
    publication.galleys = galleys;
    Submission::new(7, "7", publication)
}
