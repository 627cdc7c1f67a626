/// Handles argument parsing and the command-line runner.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Schema-metadata sources (catalog snapshots, live databases).
pub mod catalog;

/// Ordered classification rules mapping model names to schema tags.
pub mod schema;

/// Safe identifier derivation.
pub mod naming;

/// Ignore patterns for model enumeration.
pub mod ignore;

/// Placeholder rendering.
pub mod renderer;

/// Model directory enumeration.
pub mod model;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template assets and file operations.
pub mod template;

/// Artifact, DTO and aggregate generators.
pub mod generator;

/// Stage sequencing and output layout.
pub mod pipeline;

/// Configuration handling.
pub mod config;

/// Constants
pub mod constants;

/// Extension traits
pub mod ext;
