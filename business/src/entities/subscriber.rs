use serde::{Deserialize, Serialize};

use super::Resource;
use crate::form::{Draft, FieldErrors};

/// A newsletter/contact-form subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Subscriber {
    /// Upper-cased first letter of the name, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub subscribed: bool,
}

impl Default for SubscriberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            message: String::new(),
            subscribed: true,
        }
    }
}

impl Draft for SubscriberDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .require("name", "Name", &self.name)
            .require("email", "Email", &self.email);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.insert("email", "Email must contain '@'");
        }
        errors
    }
}

impl Resource for Subscriber {
    type Draft = SubscriberDraft;
    const ENDPOINT: &'static str = "/api/subscribers";
    const NOUN: &'static str = "Subscriber";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> SubscriberDraft {
        SubscriberDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            company: self.company.clone().unwrap_or_default(),
            message: self.message.clone().unwrap_or_default(),
            subscribed: self.subscribed,
        }
    }
}
