//! Core data model for import-time profiles.
//!
//! This crate provides the pieces shared by every analysis over an import
//! profile, including:
//! - The [`ImportNode`] tree, one node per import frame
//! - Building a tree from the JSON document produced by a profile loader
//! - The [`ProfileError`] taxonomy returned by the analysis operations

mod error;
mod loader;
mod types;

// Re-export public API
pub use error::{ProfileError, Result};
pub use loader::load_profile_json;
pub use types::{ImportNode, NodeKind};
