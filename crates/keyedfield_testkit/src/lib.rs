//! # keyedfield testkit
//!
//! Test utilities for keyedfield.
//!
//! This crate provides:
//! - Keyed field fixtures and sample flattened documents
//! - Property-based test generators using proptest
//! - An in-memory term dictionary that executes translated queries
//! - Pinned token encoding vectors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keyedfield_testkit::prelude::*;
//!
//! #[test]
//! fn exists_matches_documents_with_key() {
//!     let dict = dictionary_of(&[(1, sample_pairs())]);
//!     let query = keyed_field("user.name").queries().exists();
//!     assert_eq!(dict.search(&query), vec![1]);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod dictionary;
pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dictionary::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use dictionary::*;
pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
