//! Portfolio projects and the categories they are filed under.

use serde::{Deserialize, Serialize};

use super::{Resource, default_true};
use crate::form::{Draft, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: i64,
    pub name: String,
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
pub struct ProjectCategoryDraft {
    pub name: String,
    pub description: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for ProjectCategoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Draft for ProjectCategoryDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", "Name", &self.name);
        errors
    }
}

impl Resource for ProjectCategory {
    type Draft = ProjectCategoryDraft;
    const ENDPOINT: &'static str = "/api/project-categories";
    const NOUN: &'static str = "Category";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> ProjectCategoryDraft {
        ProjectCategoryDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<ProjectCategoryDraft> {
        Some(ProjectCategoryDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub project_category_id: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub project_category_id: i64,
    pub is_featured: bool,
    pub is_active: bool,
}

impl ProjectDraft {
    /// Images edited as one URL per line.
    pub fn images_text(&self) -> String {
        self.images.join("\n")
    }

    pub fn set_images_text(&mut self, text: &str) {
        self.images = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
    }
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            images: Vec::new(),
            project_category_id: 0,
            is_featured: false,
            is_active: true,
        }
    }
}

impl Draft for ProjectDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .require("title", "Title", &self.title)
            .require("description", "Description", &self.description);
        if self.project_category_id <= 0 {
            errors.insert("project_category_id", "Category is required");
        }
        errors
    }
}

impl Resource for Project {
    type Draft = ProjectDraft;
    const ENDPOINT: &'static str = "/api/projects";
    const NOUN: &'static str = "Project";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            images: self.images.clone(),
            project_category_id: self.project_category_id,
            is_featured: self.is_featured,
            is_active: self.is_active,
        }
    }

    fn toggled(&self) -> Option<ProjectDraft> {
        Some(ProjectDraft {
            is_active: !self.is_active,
            ..self.to_draft()
        })
    }
}
