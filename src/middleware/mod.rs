pub mod auth;
pub mod cache;
pub mod https;

pub use auth::{Access, access_gate};
pub use cache::cache_control_middleware;
pub use https::https_middleware;
