/// Handles argument parsing and command dispatch.
pub mod cli;

/// Shared constants: storage defaults and tag vocabularies.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Terminal prompting primitives.
pub mod prompt;

/// The recipe record and its interactive editor.
pub mod recipe;
