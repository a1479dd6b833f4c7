//! create-discord-app scaffolds Discord.js bot projects.
//! It collects a small set of choices, materializes the project skeleton,
//! and renders a consistent set of starter files for the chosen variant.

/// Command-line interface module for the application
pub mod cli;

/// Project configuration collected from user answers
pub mod config;

/// Error types and handling for the application
pub mod error;

/// Per-artifact file generators and the template composer
pub mod generators;

/// Generation orchestration and file writing
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Declarative directory skeleton and its builder
pub mod structure;
