// Decides where a request goes: Ask, Draft or Automate
//
// Plain keyword matching, nothing clever. Sets are checked in a fixed order and
// the first set that hits anywhere in the text wins, no matter where in the
// text the keyword sits. So "contract review workflow" is an Analysis.

use crate::core::models::Intent;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

// Checked top to bottom. Order matters.
const KEYWORD_SETS: &[(Intent, &[&str])] = &[
    (
        Intent::ANALYSIS,
        &["summarize", "analyze", "review", "key points", "analysis"],
    ),
    (
        Intent::DRAFT,
        &["draft", "create", "agreement", "contract", "document"],
    ),
    (
        Intent::WORKFLOW,
        &["workflow", "automate", "checklist", "process", "automation"],
    ),
];

// Nothing matched? Treat it as a question.
const FALLBACK: Intent = Intent::ANALYSIS;

struct Rule {
    intent: Intent,
    regex: Regex,
}

/// Keyword router with its patterns compiled once
pub struct IntentRouter {
    rules: Vec<Rule>,
}

impl IntentRouter {
    pub fn new() -> Self {
        // One whole-word alternation per set
        let rules = KEYWORD_SETS
            .iter()
            .filter_map(|(intent, keywords)| {
                let alternation = keywords
                    .iter()
                    .map(|keyword| regex::escape(keyword))
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
                    .ok()
                    .map(|regex| Rule {
                        intent: *intent,
                        regex,
                    })
            })
            .collect();

        Self { rules }
    }

    /// Classify free text.
    ///
    /// Callers reject empty input first. Anything else gets an answer.
    pub fn classify(&self, text: &str) -> Intent {
        self.decide(text).0
    }

    /// Which keyword decided the route, if any did
    pub fn matched_keyword(&self, text: &str) -> Option<String> {
        self.decide(text).1
    }

    fn decide(&self, text: &str) -> (Intent, Option<String>) {
        let lowercase = text.to_lowercase();

        for rule in &self.rules {
            if let Some(found) = rule.regex.find(&lowercase) {
                debug!(
                    category = %rule.intent.category,
                    keyword = found.as_str(),
                    "request routed"
                );
                return (rule.intent, Some(found.as_str().to_string()));
            }
        }

        debug!(category = %FALLBACK.category, "no keyword matched, using fallback");
        (FALLBACK, None)
    }

    #[cfg(test)]
    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with a shared router built on first use
pub fn classify(text: &str) -> Intent {
    static ROUTER: OnceLock<IntentRouter> = OnceLock::new();
    ROUTER.get_or_init(IntentRouter::new).classify(text)
}
