mod data_table;
mod inputs;
mod modal;
mod status;

pub use data_table::{TableResponse, data_table};
pub use inputs::{Checkbox, Input, NumberInput, Select, TextArea};
pub use modal::{ModalResponse, confirm_dialog, modal};
pub use status::{api_health, health_summary};
