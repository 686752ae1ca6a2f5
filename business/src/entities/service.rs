use serde::{Deserialize, Serialize};

use super::{Resource, default_true};
use crate::form::{Draft, FieldErrors};

/// A service offering shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
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
pub struct ServiceDraft {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            icon: String::new(),
            title: String::new(),
            description: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for ServiceDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("title", "Title", &self.title);
        errors
    }
}

impl Resource for Service {
    type Draft = ServiceDraft;
    const ENDPOINT: &'static str = "/api/services";
    const NOUN: &'static str = "Service";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> ServiceDraft {
        ServiceDraft {
            icon: self.icon.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<ServiceDraft> {
        Some(ServiceDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}
