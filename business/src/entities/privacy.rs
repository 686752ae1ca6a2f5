use serde::{Deserialize, Serialize};

use super::{Resource, default_true};
use crate::api::ReorderItem;
use crate::form::{Draft, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyPolicySection {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl PrivacyPolicySection {
    /// Reorder payload assigning `1..=n` in the given sequence.
    pub fn reorder_items(sections: &[Self]) -> Vec<ReorderItem> {
        sections
            .iter()
            .zip(1..)
            .map(|(section, display_order)| ReorderItem {
                id: section.id,
                display_order,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivacyPolicySectionDraft {
    pub title: String,
    pub content: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for PrivacyPolicySectionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for PrivacyPolicySectionDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("title", "Title", &self.title);
        errors
    }
}

impl Resource for PrivacyPolicySection {
    type Draft = PrivacyPolicySectionDraft;
    const ENDPOINT: &'static str = "/api/privacy-policy-sections";
    const NOUN: &'static str = "Section";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> PrivacyPolicySectionDraft {
        PrivacyPolicySectionDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<PrivacyPolicySectionDraft> {
        Some(PrivacyPolicySectionDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}
