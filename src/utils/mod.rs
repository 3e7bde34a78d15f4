//! Utility modules for common functionality
//!
//! This module provides logging setup, progress display and argument
//! parsing helpers used by the command line tool.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod arg_utils;
