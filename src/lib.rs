pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use api::{confirm_via_lookup, confirm_via_notification};
pub use domain::response::ConfirmationResult;
pub use error::{ConfirmError, Result};
