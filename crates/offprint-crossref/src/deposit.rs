//! Full deposit document assembly
//!
//! Wraps article conversion into a complete `doi_batch` document - head,
//! journal metadata and issue nodes - ready for submission to the
//! registration agency.

use chrono::Utc;
use offprint_domain::{Issue, Journal, Submission};

use crate::article::{build_article_nodes, build_publication_date};
use crate::context::{DepositContext, IssueLookup};
use crate::error::DepositError;
use crate::xml::{self, Element};

/// Identification block for the deposit head
#[derive(Clone, Debug)]
pub struct DepositHead {
    pub doi_batch_id: String,
    pub depositor_name: String,
    pub depositor_email: String,
    pub registrant: String,
    /// UNIX timestamp recorded in the head, defaults to now
    pub timestamp: i64,
}

impl DepositHead {
    pub fn new(
        doi_batch_id: impl Into<String>,
        depositor_name: impl Into<String>,
        depositor_email: impl Into<String>,
        registrant: impl Into<String>,
    ) -> Self {
        Self {
            doi_batch_id: doi_batch_id.into(),
            depositor_name: depositor_name.into(),
            depositor_email: depositor_email.into(),
            registrant: registrant.into(),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Builder method to fix the timestamp, for reproducible output
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Assemble the complete deposit document for a batch of submissions.
///
/// Each submission gets its own `journal` node carrying the journal
/// metadata, the submission's issue when one is referenced, and all of
/// its `journal_article` nodes as siblings.
pub fn build_deposit(
    ctx: &DepositContext,
    head: &DepositHead,
    journal: &Journal,
    issues: &dyn IssueLookup,
    submissions: &[Submission],
) -> Result<String, DepositError> {
    let mut batch = Element::new("doi_batch")
        .with_attr("xmlns", xml::CROSSREF_NS)
        .with_attr("xmlns:xsi", xml::XSI_NS)
        .with_attr("xmlns:jats", xml::JATS_NS)
        .with_attr("xmlns:ai", xml::AI_NS)
        .with_attr("version", xml::CROSSREF_VERSION)
        .with_attr("xsi:schemaLocation", xml::CROSSREF_SCHEMA_LOCATION);

    batch.append(build_head(head));

    let mut body = Element::new("body");
    for submission in submissions {
        let mut journal_node = Element::new("journal");
        journal_node.append(build_journal_metadata(journal));
        if let Some(issue_id) = submission.publication.issue_id {
            let issue = issues
                .issue(issue_id)
                .ok_or(DepositError::UnknownIssue(issue_id))?;
            journal_node.append(build_journal_issue(&issue));
        }
        for article in build_article_nodes(ctx, submission) {
            journal_node.append(article);
        }
        body.append(journal_node);
    }
    batch.append(body);

    Ok(batch.to_document())
}

fn build_head(head: &DepositHead) -> Element {
    let mut node = Element::new("head");
    node.append(Element::with_text("doi_batch_id", &head.doi_batch_id));
    node.append(Element::with_text("timestamp", head.timestamp.to_string()));
    let mut depositor = Element::new("depositor");
    depositor.append(Element::with_text("depositor_name", &head.depositor_name));
    depositor.append(Element::with_text("email_address", &head.depositor_email));
    node.append(depositor);
    node.append(Element::with_text("registrant", &head.registrant));
    node
}

fn build_journal_metadata(journal: &Journal) -> Element {
    let mut metadata = Element::new("journal_metadata");
    metadata.append(Element::with_text("full_title", &journal.name));
    if let Some(abbreviation) = &journal.abbreviation {
        metadata.append(Element::with_text("abbrev_title", abbreviation));
    }
    if let Some(issn) = &journal.issn {
        let mut node = Element::new("issn").with_attr("media_type", "print");
        node.append_text(issn);
        metadata.append(node);
    }
    if let Some(eissn) = &journal.eissn {
        let mut node = Element::new("issn").with_attr("media_type", "electronic");
        node.append_text(eissn);
        metadata.append(node);
    }
    metadata
}

fn build_journal_issue(issue: &Issue) -> Element {
    let mut node = Element::new("journal_issue");
    if let Some(date) = issue.date_published {
        node.append(build_publication_date(date));
    }
    if let Some(volume) = &issue.volume {
        let mut volume_node = Element::new("journal_volume");
        volume_node.append(Element::with_text("volume", volume));
        node.append(volume_node);
    }
    if let Some(number) = &issue.number {
        node.append(Element::with_text("issue", number));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_head_structure() {
        let head = DepositHead::new("batch-1", "Press Office", "office@example.org", "Example U")
            .with_timestamp(1700000000);
        let node = build_head(&head);
        assert_eq!(node.find("doi_batch_id").unwrap().text(), "batch-1");
        assert_eq!(node.find("timestamp").unwrap().text(), "1700000000");
        let depositor = node.find("depositor").unwrap();
        assert_eq!(depositor.find("email_address").unwrap().text(), "office@example.org");
        assert_eq!(node.find("registrant").unwrap().text(), "Example U");
    }

    #[test]
    fn test_journal_metadata_issn_media_types() {
        let journal = Journal::new("Acta Exemplaria")
            .with_issn("1234-5678")
            .with_eissn("8765-4321");
        let metadata = build_journal_metadata(&journal);
        let issns = metadata.find_all("issn");
        assert_eq!(issns.len(), 2);
        assert_eq!(issns[0].attr("media_type"), Some("print"));
        assert_eq!(issns[1].attr("media_type"), Some("electronic"));
    }

    #[test]
    fn test_journal_issue_structure() {
        let issue = Issue::new(3)
            .with_numbering("12", "2")
            .with_date_published(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let node = build_journal_issue(&issue);
        assert_eq!(node.find("journal_volume").unwrap().find("volume").unwrap().text(), "12");
        assert_eq!(node.find("issue").unwrap().text(), "2");
        assert!(node.find("publication_date").is_some());
    }
}
