//! Task Triage Library
//!
//! An in-memory task store paired with a hybrid categorization engine that
//! prefers a remote LLM classifier and falls back to deterministic keyword
//! scoring.

pub mod categorize;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;
