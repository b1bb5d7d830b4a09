//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `framework` - Framework keys, templates and keyword selection
//! - `engine` - Input validation and framework dispatch

pub mod engine;
pub mod framework;
