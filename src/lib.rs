/// Handles argument parsing and generation runs.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Emitter table and template/output path mapping.
pub mod emitter;

/// Template parsing and rendering functionality.
pub mod renderer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Per-emitter template processing.
pub mod template;

/// Configuration handling for template roots.
pub mod config;
