//! Command-line handling for the `obrik` binary.

pub mod args;
