//! Command line interface for the pravopis spell checker.

pub mod args;
pub mod commands;
pub mod output;
