// Turns whatever was typed into a submission
//
// Guards the door: empty or absurdly long text never reaches the router or
// the recent list.

use crate::core::models::Intent;
use crate::core::recent::{truncate_title, DEFAULT_TITLE_MAX_CHARS};
use crate::error::{DeskError, Result};
use crate::intelligence::IntentRouter;

// Nobody needs to paste a whole brief into the composer.
const MAX_QUERY_LENGTH: usize = 10_000;

/// A validated, classified request ready to be recorded
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub full_query: String,
    pub title: String,
    pub intent: Intent,
}

pub struct Composer {
    router: IntentRouter,
    title_max_chars: usize,
}

impl Composer {
    pub fn new(title_max_chars: usize) -> Self {
        Self {
            router: IntentRouter::new(),
            title_max_chars: title_max_chars.max(1),
        }
    }

    // Main function. Validate, classify, work out the title.
    pub fn prepare(&self, text: &str) -> Result<Submission> {
        let full_query = self.validate(text)?;
        let intent = self.router.classify(full_query);
        let title = truncate_title(full_query, self.title_max_chars);

        Ok(Submission {
            full_query: full_query.to_string(),
            title,
            intent,
        })
    }

    /// Which keyword the router would pick for this text
    pub fn explain(&self, text: &str) -> Option<String> {
        self.router.matched_keyword(text)
    }

    // Trimmed text back if it's fine to submit
    fn validate<'a>(&self, text: &'a str) -> Result<&'a str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DeskError::EmptySubmission);
        }

        if trimmed.chars().count() > MAX_QUERY_LENGTH {
            return Err(DeskError::QueryTooLong(MAX_QUERY_LENGTH));
        }

        Ok(trimmed)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_MAX_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Destination;

    #[test]
    fn test_prepare_valid_request() {
        let composer = Composer::default();

        let submission = composer.prepare("  draft a consulting agreement  ").unwrap();

        assert_eq!(submission.full_query, "draft a consulting agreement");
        assert_eq!(submission.title, "draft a consulting agreement");
        assert_eq!(submission.intent.destination, Destination::Draft);
    }

    #[test]
    fn test_prepare_empty_request() {
        let composer = Composer::default();

        for text in ["", "   ", "\n\t"] {
            match composer.prepare(text) {
                Err(DeskError::EmptySubmission) => {}
                other => panic!("Expected EmptySubmission, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_prepare_too_long() {
        let composer = Composer::default();

        let long_query = "a".repeat(MAX_QUERY_LENGTH + 1);
        match composer.prepare(&long_query) {
            Err(DeskError::QueryTooLong(_)) => {}
            other => panic!("Expected QueryTooLong error, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_truncates_title() {
        let composer = Composer::default();

        let query = "Summarize the key obligations in the master services agreement";
        let submission = composer.prepare(query).unwrap();

        assert_eq!(submission.full_query, query);
        assert_eq!(submission.title, "Summarize the key obligations …");
    }

    #[test]
    fn test_custom_title_length() {
        let composer = Composer::new(5);
        let submission = composer.prepare("review lease").unwrap();
        assert_eq!(submission.title, "revie…");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        let composer = Composer::default();
        let submission = composer.prepare("review   clause 4").unwrap();
        assert_eq!(submission.full_query, "review   clause 4");
    }

    #[test]
    fn test_explain() {
        let composer = Composer::default();
        assert_eq!(composer.explain("run due diligence checklist").as_deref(), Some("checklist"));
        assert_eq!(composer.explain("hello"), None);
    }
}
