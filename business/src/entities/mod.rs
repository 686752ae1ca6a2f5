//! Content records managed by the dashboard.
//!
//! Every record type implements [`Resource`], which ties it to its REST
//! collection path and to the [`Draft`] the create/edit form works on.

mod faq;
mod people;
mod project;
mod review;
mod service;
mod setting;
mod privacy;
mod subscriber;

pub use faq::{Faq, FaqDraft};
pub use people::{Leadership, LeadershipDraft, TeamMember, TeamMemberDraft};
pub use privacy::{PrivacyPolicySection, PrivacyPolicySectionDraft};
pub use project::{Project, ProjectCategory, ProjectCategoryDraft, ProjectDraft};
pub use review::{CustomerReview, CustomerReviewDraft, MAX_RATING};
pub use service::{Service, ServiceDraft};
pub use setting::{Setting, SettingDraft};
pub use subscriber::{Subscriber, SubscriberDraft};

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::form::Draft;

/// A record type exposed under `/api/{entity}`.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: Draft;

    /// Collection path, e.g. `/api/faqs`.
    const ENDPOINT: &'static str;

    /// Singular display noun, e.g. "FAQ".
    const NOUN: &'static str;

    fn id(&self) -> i64;

    fn to_draft(&self) -> Self::Draft;

    /// The full record with its activation flag flipped, for toggle actions.
    ///
    /// `None` for records without such a flag.
    fn toggled(&self) -> Option<Self::Draft> {
        None
    }
}

/// Serde default for activation flags.
pub(crate) fn default_true() -> bool {
    true
}
