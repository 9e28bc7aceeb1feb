//! # Trivia HTTP Server Module
//!
//! JSON API over the question catalog and quiz selector, combined into
//! a single axum router.
//!
//! # Endpoints
//!
//! - `/categories` - Category mapping
//! - `/questions` - Paged listing and creation
//! - `/questions/search` - Substring search
//! - `/questions/:id` - Deletion
//! - `/categories/:id/questions` - Per-category listing
//! - `/quizzes` - Next unseen quiz question
//! - `/health`, `/metrics` - Monitoring

pub mod config;
pub mod errors;
pub mod extract;
pub mod observability_routes;
pub mod response;
pub mod server;
pub mod trivia_routes;

pub use config::{AllowedOrigins, ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{ServerError, TriviaServer};
pub use trivia_routes::TriviaState;
