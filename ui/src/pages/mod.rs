//! Screens reachable from the sidebar.
//!
//! Each screen owns its page controller. The app calls [`Screen::enter`] when
//! the screen becomes visible and [`Screen::leave`] when the user navigates
//! away, which abandons whatever the screen still had in flight.

mod crud;
mod dashboard;
mod faqs;
mod leadership;
mod privacy;
mod project_categories;
mod projects;
mod reviews;
mod services;
mod settings;
mod subscribers;
mod team_members;

pub use crud::{Crud, CrudOutput, RowIntent};
pub use dashboard::DashboardScreen;
pub use faqs::FaqsScreen;
pub use leadership::LeadershipScreen;
pub use privacy::PrivacyScreen;
pub use project_categories::ProjectCategoriesScreen;
pub use projects::ProjectsScreen;
pub use reviews::ReviewsScreen;
pub use services::ServicesScreen;
pub use settings::SettingsScreen;
pub use subscribers::SubscribersScreen;
pub use team_members::TeamMembersScreen;

use egui::Ui;

/// Sidebar entries, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Subscribers,
    Reviews,
    Services,
    TeamMembers,
    Leadership,
    ProjectCategories,
    Projects,
    Faqs,
    Settings,
    PrivacyPolicy,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Dashboard,
        Route::Subscribers,
        Route::Reviews,
        Route::Services,
        Route::TeamMembers,
        Route::Leadership,
        Route::ProjectCategories,
        Route::Projects,
        Route::Faqs,
        Route::Settings,
        Route::PrivacyPolicy,
    ];

    /// Sidebar caption.
    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Subscribers => "Subscribers",
            Route::Reviews => "Customer Reviews",
            Route::Services => "Services",
            Route::TeamMembers => "Team Members",
            Route::Leadership => "Leadership",
            Route::ProjectCategories => "Project Categories",
            Route::Projects => "Projects",
            Route::Faqs => "FAQs",
            Route::Settings => "Settings",
            Route::PrivacyPolicy => "Privacy Policy",
        }
    }

    /// Header title of the screen.
    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard Overview",
            Route::Subscribers => "Subscribers Management",
            Route::Reviews => "Customer Reviews",
            Route::Services => "Services Management",
            Route::TeamMembers => "Team Members",
            Route::Leadership => "Leadership Team",
            Route::ProjectCategories => "Project Categories",
            Route::Projects => "Projects Portfolio",
            Route::Faqs => "Frequently Asked Questions",
            Route::Settings => "Site Settings",
            Route::PrivacyPolicy => "Privacy Policy",
        }
    }
}

pub trait Screen {
    /// Became visible: fetch fresh data.
    fn enter(&mut self);

    /// Hidden again: abandon in-flight requests.
    fn leave(&mut self);

    /// Applies arrived results. Returns whether anything changed.
    fn poll(&mut self) -> bool;

    fn is_busy(&self) -> bool;

    fn ui(&mut self, ui: &mut Ui);
}

/// `2024-03-01T10:00:00Z` → `2024-03-01`; anything unparsable is shown as is.
pub(crate) fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}
