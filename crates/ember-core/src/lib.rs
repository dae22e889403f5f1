//! Ember Core - Foundational types for the Ember particle engine
//!
//! This crate provides the types that the other Ember crates depend on:
//! - `Vec3` - World-space vector math
//! - Error types and Result alias

mod error;
mod types;

pub use error::{EmberError, Result};
pub use types::Vec3;
