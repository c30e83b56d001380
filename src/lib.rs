/// Handles argument parsing and pipeline orchestration.
pub mod cli;

/// Fixed names, templates and prompt defaults.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// External tool invocation helpers.
pub mod exec;

/// Minimal editor for the local hosts file.
pub mod hostsfile;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// The immutable parameter set and the values resolved from it.
pub mod params;

/// Spinner shown while external operations run.
pub mod progress;

/// User input and interaction handling.
pub mod prompt;

/// The ordered provisioning steps.
pub mod steps;
