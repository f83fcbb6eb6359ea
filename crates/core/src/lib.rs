//! Strata Core - Storage and versioning engine for the strata file store
//!
//! This crate provides the foundational storage layer:
//! - Path sandboxing (resolved paths never leave the storage root)
//! - Revision allocation (monotonic, gapless HEAD counter)
//! - Directory tree enumeration for listings
//! - Full-copy snapshots and ZIP archive imports
//! - Sandboxed file operations against the working tree

pub mod archive;
pub mod error;
pub mod fileops;
pub mod revision;
pub mod sandbox;
pub mod search;
pub mod snapshot;
pub mod store;
pub mod tree;

// Re-export main types for convenience
pub use error::Error;
pub use search::SearchHit;
pub use store::Store;
pub use tree::Node;

/// Common result type used throughout strata-core
pub type Result<T> = std::result::Result<T, Error>;
