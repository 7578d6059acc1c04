#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::WidgetError;

pub const FALLBACK_REPLY: &str =
    "I'm a demo agent. I can only answer predefined questions for now.";

/// A clickable suggested question with a canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedPrompt {
    pub id: u32,
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A keyword rule. Rules are matched in catalog order, first hit wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReply {
    pub keyword: String,
    pub reply: String,
}

/// Static data shown by the widget and consulted by the demo agent.
///
/// Deserializing a partial document keeps the built-in value for every
/// section it leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub prompts: Vec<PredefinedPrompt>,
    pub faqs: Vec<FaqEntry>,
    pub recent_questions: Vec<String>,
    pub keyword_replies: Vec<KeywordReply>,
    pub fallback_reply: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            prompts: vec![
                prompt(
                    1,
                    "Where can I find the schedule?",
                    "The schedule is available in the https://lodz.celcat.cloud/.",
                ),
                prompt(
                    2,
                    "Where is the library?",
                    "The library is located in Building B, 2nd floor.",
                ),
                prompt(
                    3,
                    "Contact support",
                    "You can contact support at support@wikamp.edu.pl.",
                ),
            ],
            faqs: vec![
                faq(
                    "When are exams?",
                    "Exams schedule is available in the 'Classrooms and exams' section.",
                ),
                faq(
                    "How to register for courses?",
                    "Go to 'Courses' -> 'Registration' during the enrollment period.",
                ),
                faq(
                    "Can I change my group?",
                    "Group changes require Dean's approval. Submit a request via 'Student Area'.",
                ),
            ],
            recent_questions: vec![
                "Scholarship requirements".to_string(),
                "Canteen opening hours".to_string(),
                "Parking availability".to_string(),
            ],
            keyword_replies: vec![
                keyword(
                    "scholarship",
                    "Scholarship requirements can be found in the 'Student Welfare' section.",
                ),
                keyword("canteen", "The canteen is open from 8:00 AM to 4:00 PM."),
                keyword("parking", "Student parking is available behind Building C."),
            ],
            fallback_reply: FALLBACK_REPLY.to_string(),
        }
    }
}

fn prompt(id: u32, text: &str, answer: &str) -> PredefinedPrompt {
    PredefinedPrompt { id, text: text.to_string(), answer: answer.to_string() }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry { question: question.to_string(), answer: answer.to_string() }
}

fn keyword(keyword: &str, reply: &str) -> KeywordReply {
    KeywordReply { keyword: keyword.to_string(), reply: reply.to_string() }
}

impl Catalog {
    /// Parses and validates a JSON catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, WidgetError> {
        let catalog: Catalog = serde_json::from_str(json).map_err(WidgetError::CatalogParse)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WidgetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| WidgetError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), WidgetError> {
        let mut seen = HashSet::new();
        for p in &self.prompts {
            if !seen.insert(p.id) {
                return Err(WidgetError::DuplicatePromptId { id: p.id });
            }
            require("prompts.text", &p.text)?;
            require("prompts.answer", &p.answer)?;
        }
        for f in &self.faqs {
            require("faqs.question", &f.question)?;
            require("faqs.answer", &f.answer)?;
        }
        for q in &self.recent_questions {
            require("recent_questions", q)?;
        }
        for k in &self.keyword_replies {
            require("keyword_replies.keyword", &k.keyword)?;
            require("keyword_replies.reply", &k.reply)?;
        }
        require("fallback_reply", &self.fallback_reply)
    }

    pub fn prompt_by_id(&self, id: u32) -> Option<&PredefinedPrompt> {
        self.prompts.iter().find(|p| p.id == id)
    }
}

fn require(field_name: &str, value: &str) -> Result<(), WidgetError> {
    if value.trim().is_empty() {
        return Err(WidgetError::empty_field(field_name));
    }
    Ok(())
}
