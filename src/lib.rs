//! trivia - a JSON API for trivia questions and quizzes
//!
//! Questions belong to categories, are paged, searched, created and
//! deleted over HTTP, and a quiz endpoint draws unseen questions at random.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod quiz;
pub mod storage;
