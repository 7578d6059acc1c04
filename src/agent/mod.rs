#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;

/// Canned-answer agent behind the widget.
///
/// Lookup order: an exact prompt text match, then the first keyword found
/// in the lowercased query, then the catalog's fallback reply.
#[derive(Debug, Clone)]
pub struct DemoAgent {
    catalog: Arc<Catalog>,
}

impl DemoAgent {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reply(&self, text: &str) -> &str {
        if let Some(prompt) = self.catalog.prompts.iter().find(|p| p.text == text) {
            debug!(prompt_id = prompt.id, "matched predefined prompt");
            return &prompt.answer;
        }

        let lower = text.to_lowercase();
        if let Some(rule) = self
            .catalog
            .keyword_replies
            .iter()
            .find(|k| lower.contains(&k.keyword.to_lowercase()))
        {
            debug!(keyword = %rule.keyword, "matched keyword");
            return &rule.reply;
        }

        debug!("no match, using fallback reply");
        &self.catalog.fallback_reply
    }
}
