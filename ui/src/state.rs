use log::{info, warn};
use sitedesk_business::{ApiClient, BusinessConfig};

use crate::pages::{
    DashboardScreen, FaqsScreen, LeadershipScreen, PrivacyScreen, ProjectCategoriesScreen,
    ProjectsScreen, ReviewsScreen, Route, Screen, ServicesScreen, SettingsScreen,
    SubscribersScreen, TeamMembersScreen,
};

/// The main application state: one client shared by every screen.
pub struct State {
    pub client: ApiClient,
    pub route: Route,
    /// Whether the current route has been entered yet.
    entered: bool,

    pub dashboard: DashboardScreen,
    pub subscribers: SubscribersScreen,
    pub reviews: ReviewsScreen,
    pub services: ServicesScreen,
    pub team_members: TeamMembersScreen,
    pub leadership: LeadershipScreen,
    pub project_categories: ProjectCategoriesScreen,
    pub projects: ProjectsScreen,
    pub faqs: FaqsScreen,
    pub settings: SettingsScreen,
    pub privacy: PrivacyScreen,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("Invalid configuration, using defaults: {err}");
            BusinessConfig::default()
        });
        Self::new(config)
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        info!("API base URL: {}", config.api_base_url);
        let client = ApiClient::new(config);
        Self {
            route: Route::default(),
            entered: false,
            dashboard: DashboardScreen::new(client.clone()),
            subscribers: SubscribersScreen::new(client.clone()),
            reviews: ReviewsScreen::new(client.clone()),
            services: ServicesScreen::new(client.clone()),
            team_members: TeamMembersScreen::new(client.clone()),
            leadership: LeadershipScreen::new(client.clone()),
            project_categories: ProjectCategoriesScreen::new(client.clone()),
            projects: ProjectsScreen::new(client.clone()),
            faqs: FaqsScreen::new(client.clone()),
            settings: SettingsScreen::new(client.clone()),
            privacy: PrivacyScreen::new(client.clone()),
            client,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    pub fn screen_mut(&mut self, route: Route) -> &mut dyn Screen {
        match route {
            Route::Dashboard => &mut self.dashboard,
            Route::Subscribers => &mut self.subscribers,
            Route::Reviews => &mut self.reviews,
            Route::Services => &mut self.services,
            Route::TeamMembers => &mut self.team_members,
            Route::Leadership => &mut self.leadership,
            Route::ProjectCategories => &mut self.project_categories,
            Route::Projects => &mut self.projects,
            Route::Faqs => &mut self.faqs,
            Route::Settings => &mut self.settings,
            Route::PrivacyPolicy => &mut self.privacy,
        }
    }

    fn screen(&self, route: Route) -> &dyn Screen {
        match route {
            Route::Dashboard => &self.dashboard,
            Route::Subscribers => &self.subscribers,
            Route::Reviews => &self.reviews,
            Route::Services => &self.services,
            Route::TeamMembers => &self.team_members,
            Route::Leadership => &self.leadership,
            Route::ProjectCategories => &self.project_categories,
            Route::Projects => &self.projects,
            Route::Faqs => &self.faqs,
            Route::Settings => &self.settings,
            Route::PrivacyPolicy => &self.privacy,
        }
    }

    /// Leaves the current screen and enters `route`, even when it is the
    /// same one (which reloads it).
    pub fn navigate(&mut self, route: Route) {
        if self.entered {
            self.screen_mut(self.route).leave();
        }
        info!("Navigating to {}", route.label());
        self.route = route;
        self.screen_mut(route).enter();
        self.entered = true;
    }

    /// Enters the initial screen on first use, then applies arrived results
    /// of the current screen. The dashboard keeps polling so the header's
    /// health dot stays current.
    pub fn poll(&mut self) -> bool {
        if !self.entered {
            self.navigate(self.route);
        }
        let mut changed = self.screen_mut(self.route).poll();
        if self.route != Route::Dashboard {
            changed |= self.dashboard.poll();
        }
        changed
    }

    pub fn is_busy(&self) -> bool {
        self.screen(self.route).is_busy()
    }
}
