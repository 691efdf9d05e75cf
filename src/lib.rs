//! Join student records into their rooms and export the result.
//!
//! The crate implements a three-stage pipeline: a [`loader`] reads the two
//! input collections, the [`combiner`] joins students into their rooms on
//! the `student.room -> room.id` foreign key, and an [`export`] strategy
//! serializes the nested documents to JSON or XML.
//!
//! The binary `roomjoin` drives the pipeline from command-line flags or,
//! when invoked without arguments, from interactive prompts.

pub mod combiner;
pub mod error;
pub mod export;
pub mod input;
pub mod loader;
pub mod model;
pub mod pipeline;

pub use error::{Error, Result};
