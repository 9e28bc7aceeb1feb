//! # Quiz Selector
//!
//! Picks one unseen question at random. The client holds the quiz session
//! and resends every previously answered id on each turn, so the selector
//! keeps no state beyond its random source.

mod request;
mod selector;

pub use request::{QuizCategory, QuizRequest};
pub use selector::{pick_unseen, QuizSelector};
