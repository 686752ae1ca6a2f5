//! Business layer of the site content dashboard.
//!
//! Everything here is UI-agnostic: the typed API client, the content records,
//! the generic table model and the page controllers that the egui crate
//! renders.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod entities;
pub mod form;
pub mod http;
pub mod modal;
pub mod page;
pub mod scope;
pub mod table;

pub use api::{ApiClient, RequestError};
pub use config::{BusinessConfig, ConfigError};
pub use dashboard::{DashboardState, DashboardStats};
pub use form::{Draft, FieldErrors, FormMode};
pub use modal::{ModalSize, ModalState};
pub use page::EntityPage;
pub use scope::TaskScope;
