//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Stay storage-agnostic; services only see repository traits.

pub mod startup_runner;
