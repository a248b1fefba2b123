//! create-vanilla scaffolds a vanilla JavaScript or TypeScript web project
//! from a set of composable template directories.

/// Command-line interface module for the create-vanilla application
pub mod cli;

/// Run configuration and the resolved project options
pub mod config;

/// Well-known file names, template names and rewrite rules
pub mod constants;

/// Error types and handling for the create-vanilla application
pub mod error;

/// Orchestration of the render, rewrite and write steps
pub mod generator;

/// Logging setup
pub mod logger;

/// Generated `package.json`
pub mod manifest;

/// Line and JSON merge rules for files several templates contribute to
pub mod merge;

/// Package manager detection and command text
pub mod package_manager;

/// Copies template directories onto the project directory
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Generated `README.md`
pub mod readme;

/// Text template rendering engine
pub mod renderer;

/// Deterministic pre-order directory walk
pub mod traverse;

/// Conversion of a rendered project to TypeScript
pub mod typed;

/// Package name validation
pub mod validation;
