use serde::{Deserialize, Serialize};

use super::{Resource, default_true};
use crate::form::{Draft, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for FaqDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            category: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for FaqDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .require("question", "Question", &self.question)
            .require("answer", "Answer", &self.answer);
        errors
    }
}

impl Resource for Faq {
    type Draft = FaqDraft;
    const ENDPOINT: &'static str = "/api/faqs";
    const NOUN: &'static str = "FAQ";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> FaqDraft {
        FaqDraft {
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category.clone(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<FaqDraft> {
        Some(FaqDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}
