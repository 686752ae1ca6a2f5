use serde::{Deserialize, Serialize};

use super::{Resource, default_true};
use crate::form::{Draft, FieldErrors};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerReview {
    pub id: i64,
    #[serde(default)]
    pub client_photo: Option<String>,
    pub client_name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub is_featured: bool,
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
pub struct CustomerReviewDraft {
    pub client_photo: String,
    pub client_name: String,
    pub comment: String,
    pub rating: u8,
    pub is_featured: bool,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for CustomerReviewDraft {
    fn default() -> Self {
        Self {
            client_photo: String::new(),
            client_name: String::new(),
            comment: String::new(),
            rating: 0,
            is_featured: false,
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for CustomerReviewDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("client_name", "Client Name", &self.client_name);
        if self.rating > MAX_RATING {
            errors.insert("rating", format!("Rating must be between 0 and {MAX_RATING}"));
        }
        errors
    }
}

impl Resource for CustomerReview {
    type Draft = CustomerReviewDraft;
    const ENDPOINT: &'static str = "/api/customer-reviews";
    const NOUN: &'static str = "Review";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> CustomerReviewDraft {
        CustomerReviewDraft {
            client_photo: self.client_photo.clone().unwrap_or_default(),
            client_name: self.client_name.clone(),
            comment: self.comment.clone(),
            rating: self.rating,
            is_featured: self.is_featured,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<CustomerReviewDraft> {
        Some(CustomerReviewDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_only_the_active_flag() {
        let review = CustomerReview {
            id: 1,
            client_photo: None,
            client_name: "Dana".to_owned(),
            comment: "Great".to_owned(),
            rating: 4,
            is_featured: true,
            display_order: 2,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        };

        let toggled = review.toggled().expect("reviews have an active flag");
        assert!(!toggled.is_active);
        assert_eq!(
            toggled,
            CustomerReviewDraft {
                is_active: false,
                ..review.to_draft()
            }
        );
    }
}
