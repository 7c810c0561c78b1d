//! Core utilities and types for the astgen AST generator.
//!
//! This crate provides the file primitives shared by the generator crates.

mod file;

// File operations
pub use file::{GeneratedFile, WriteResult};
