//! Command line interface for Xyston.

pub mod args;
pub mod commands;
pub mod output;
