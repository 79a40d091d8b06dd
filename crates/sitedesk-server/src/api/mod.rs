pub mod auth;
pub mod projects;
pub mod reports;
pub mod response;
pub mod state;
pub mod users;

pub use response::{ApiError, ApiResponse};
