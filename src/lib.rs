/// Handles argument parsing and answer collection.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Answers and the render context derived from them.
pub mod context;

/// The fixed template catalog.
pub mod catalog;

/// Target directory lifecycle.
pub mod directory;

/// Defines custom error types.
pub mod error;

/// Template rendering engine.
pub mod renderer;

/// User input and interaction handling.
pub mod dialoguer;

/// Sources that template bodies are read from.
pub mod loader;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Rendering catalog entries into the target tree.
pub mod template;

/// End-to-end generation workflow.
pub mod scaffold;
