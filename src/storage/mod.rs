//! Storage gateway for the trivia tables
//!
//! The gateway exclusively owns persisted state: the Questions and
//! Categories tables. Everything above it works on per-request snapshots.
//!
//! # Guarantees
//!
//! - Rows come back ordered by id ascending
//! - Question ids are never reused after deletion
//! - Referential integrity (question -> category) is the store's concern,
//!   not the catalog's

mod errors;
mod gateway;
mod memory;
pub mod seed;

pub use errors::{StoreError, StoreResult};
pub use gateway::{Category, NewQuestion, Question, TriviaStore};
pub use memory::MemoryStore;
pub use seed::SeedData;
