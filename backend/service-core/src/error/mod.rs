pub mod config;
pub mod service;

pub use config::ConfigError;
pub use service::ServiceError;
