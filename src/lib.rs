//! Item Details Service Library

pub mod config;
pub mod details;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use details::{resolve, DetailsResponse, Metadata};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
