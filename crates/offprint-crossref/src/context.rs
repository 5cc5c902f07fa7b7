//! Collaborator seams injected into deposit generation
//!
//! The generator never touches the database or the router directly;
//! everything it needs from the surrounding application comes in through
//! these traits.

use offprint_domain::Issue;
use std::cell::RefCell;
use std::collections::HashMap;

/// Builds front-end URLs for articles and galley downloads
pub trait RouteResolver {
    /// Landing page URL for an article
    fn article_url(&self, submission_best_id: &str) -> String;

    /// Download URL for one galley of an article
    fn download_url(&self, submission_best_id: &str, galley_best_id: &str) -> String;
}

/// Resolves file genres to their supplementary flag
pub trait GenreLookup {
    fn is_supplementary(&self, genre_id: i64) -> bool;
}

/// Maps platform locales to ISO 639-1 codes for `language` attributes
pub trait LocaleMap {
    fn iso1(&self, locale: &str) -> String;
}

/// Locale mapper keeping the primary subtag: `"en_US"` becomes `"en"`
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLocaleMap;

impl LocaleMap for DefaultLocaleMap {
    fn iso1(&self, locale: &str) -> String {
        locale.split(['_', '-']).next().unwrap_or(locale).to_string()
    }
}

/// Resolves issue ids to issue records
pub trait IssueLookup {
    fn issue(&self, issue_id: i64) -> Option<Issue>;
}

/// Memoizing wrapper around an [`IssueLookup`], keyed by issue id.
///
/// Submissions of one batch usually share an issue; the backing lookup is
/// consulted once per id, negative results included.
pub struct CachedIssueLookup<L> {
    inner: L,
    cache: RefCell<HashMap<i64, Option<Issue>>>,
}

impl<L: IssueLookup> CachedIssueLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<L: IssueLookup> IssueLookup for CachedIssueLookup<L> {
    fn issue(&self, issue_id: i64) -> Option<Issue> {
        self.cache
            .borrow_mut()
            .entry(issue_id)
            .or_insert_with(|| self.inner.issue(issue_id))
            .clone()
    }
}

/// Everything article conversion needs from the surrounding application
pub struct DepositContext<'a> {
    pub routes: &'a dyn RouteResolver,
    pub genres: &'a dyn GenreLookup,
    pub locales: &'a dyn LocaleMap,
}

impl<'a> DepositContext<'a> {
    pub fn new(
        routes: &'a dyn RouteResolver,
        genres: &'a dyn GenreLookup,
        locales: &'a dyn LocaleMap,
    ) -> Self {
        Self {
            routes,
            genres,
            locales,
        }
    }
}
