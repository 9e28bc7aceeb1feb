//! # Question Catalog
//!
//! View logic over storage snapshots: formatting, pagination windows,
//! substring search, category filters, and create/delete with payload
//! validation. Holds no state across requests.

pub mod errors;
pub mod listing;
pub mod pagination;
pub mod service;
pub mod validation;

pub use errors::{CatalogError, CatalogResult};
pub use listing::{CategoryMap, CurrentCategory, QuestionListing, QuestionPage};
pub use pagination::{page_window, DEFAULT_QUESTIONS_PER_PAGE};
pub use service::Catalog;
pub use validation::{QuestionPayload, ValidationPolicy};
