//! crafter is an artisan-style code generator for TypeScript web projects.
//! Given a logical resource name it derives consistent naming variants and
//! emits a coordinated set of source artifacts from templates.

/// Command-line interface module for the crafter application
pub mod cli;

/// The full command surface: registration and execution
pub mod commands;

/// Project configuration handling
/// Supports JSON and YAML formats (crafter.json, crafter.yml, crafter.yaml)
pub mod config;

/// Command dispatch and the guarded execution boundary
pub mod dispatch;

/// Error types and handling for the crafter application
pub mod error;

/// Ad hoc `--key=value` flag parsing
pub mod flags;

/// Artifact generation orchestration
/// Combines naming, rendering and writing into per-artifact results
pub mod generator;

/// Naming variants derived from a raw resource identifier
pub mod naming;

/// Command registry and categorized help output
pub mod registry;

/// Template rendering functionality
pub mod renderer;

/// Filesystem output for generated artifacts
pub mod writer;
