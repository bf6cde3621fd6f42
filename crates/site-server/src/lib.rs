pub mod auth;
pub mod error;
pub mod server;

pub use auth::{AdminGate, BearerTokenGate};
pub use error::ApiError;
pub use server::SiteServer;
