use serde::{Deserialize, Serialize};

use super::Resource;
use crate::form::{Draft, FieldErrors};

/// A site-wide key/value setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingDraft {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl Draft for SettingDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .require("key", "Key", &self.key)
            .require("value", "Value", &self.value);
        if self.key.contains(char::is_whitespace) {
            errors.insert("key", "Key must not contain spaces");
        }
        errors
    }
}

impl Resource for Setting {
    type Draft = SettingDraft;
    const ENDPOINT: &'static str = "/api/settings";
    const NOUN: &'static str = "Setting";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> SettingDraft {
        SettingDraft {
            key: self.key.clone(),
            value: self.value.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}
