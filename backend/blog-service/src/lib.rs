/// Blog Service Library
///
/// Serves blog posts, per-user upvotes and comments over HTTP, enforcing that
/// only a post's author may edit or delete it.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route table
/// - `services`: Post, vote and comment business rules
/// - `db`: Entity store trait with PostgreSQL and in-memory implementations
/// - `models`: Entities and request payloads
/// - `middleware`: Authentication, request metrics and ownership checks
/// - `auth`: Bearer token claims and validation
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
