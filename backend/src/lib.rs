//! Static host for the compiled site.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::app;
