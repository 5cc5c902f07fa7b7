//! Crawler and text-mining resource collections
//!
//! Both collections live inside an article's doi_data block and point
//! crawlers at concrete galley download URLs.

use offprint_domain::{Galley, Submission};

use crate::context::DepositContext;
use crate::xml::Element;

/// Append `collection property="crawler-based"` nodes to the doi_data
/// node, one per galley.
///
/// An empty galley set still emits one childless collection marker; that
/// is deliberate placeholder behavior, not an error path.
pub fn append_as_crawled_collections(
    doi_data: &mut Element,
    ctx: &DepositContext,
    submission: &Submission,
    galleys: &[&Galley],
) {
    if galleys.is_empty() {
        doi_data.append(Element::new("collection").with_attr("property", "crawler-based"));
        return;
    }
    for galley in galleys {
        let url = ctx.routes.download_url(&submission.best_id, &galley.best_id);
        let mut collection = Element::new("collection").with_attr("property", "crawler-based");
        let mut item = Element::new("item").with_attr("crawler", "iParadigms");
        item.append(Element::with_text("resource", url));
        collection.append(item);
        doi_data.append(collection);
    }
}

/// Append the single `collection property="text-mining"` node to the
/// doi_data node, one item per galley.
///
/// Local galleys get a `mime_type` attribute on their resource; remote
/// galleys do not.
pub fn append_text_mining_collection(
    doi_data: &mut Element,
    ctx: &DepositContext,
    submission: &Submission,
    galleys: &[&Galley],
) {
    let mut collection = Element::new("collection").with_attr("property", "text-mining");
    for galley in galleys {
        let url = ctx.routes.download_url(&submission.best_id, &galley.best_id);
        let mut resource = Element::new("resource");
        if !galley.is_remote() {
            if let Some(file_type) = &galley.file_type {
                resource.set_attr("mime_type", file_type);
            }
        }
        resource.append_text(url);
        let mut item = Element::new("item");
        item.append(resource);
        collection.append(item);
    }
    doi_data.append(collection);
}
