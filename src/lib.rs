pub mod auth;
pub mod backup;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use routes::AppState;
