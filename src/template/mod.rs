//! Scaffold processing engine
//!
//! This module contains the core template processing components:
//! - `operation`: Describes the filesystem effects of a run, for logging
//! - `processor`: Renders catalog entries and writes them under the target directory

pub mod operation;
pub mod processor;
