//! Team members and leadership profiles.

use serde::{Deserialize, Serialize};

use super::{Resource, default_true};
use crate::form::{Draft, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
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
pub struct TeamMemberDraft {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub profile_image: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for TeamMemberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            bio: String::new(),
            profile_image: String::new(),
            email: String::new(),
            linkedin: String::new(),
            github: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for TeamMemberDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .require("name", "Name", &self.name)
            .require("position", "Position", &self.position);
        errors
    }
}

impl Resource for TeamMember {
    type Draft = TeamMemberDraft;
    const ENDPOINT: &'static str = "/api/team-members";
    const NOUN: &'static str = "Team Member";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> TeamMemberDraft {
        TeamMemberDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            bio: self.bio.clone(),
            profile_image: self.profile_image.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            linkedin: self.linkedin.clone().unwrap_or_default(),
            github: self.github.clone().unwrap_or_default(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<TeamMemberDraft> {
        Some(TeamMemberDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leadership {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
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
pub struct LeadershipDraft {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub profile_image: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for LeadershipDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            bio: String::new(),
            profile_image: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for LeadershipDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .require("name", "Name", &self.name)
            .require("position", "Position", &self.position);
        errors
    }
}

impl Resource for Leadership {
    type Draft = LeadershipDraft;
    const ENDPOINT: &'static str = "/api/leadership";
    const NOUN: &'static str = "Leader";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> LeadershipDraft {
        LeadershipDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            bio: self.bio.clone(),
            profile_image: self.profile_image.clone().unwrap_or_default(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<LeadershipDraft> {
        Some(LeadershipDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}
