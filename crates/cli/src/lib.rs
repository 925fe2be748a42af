//! Brickset CLI library - command implementations shared with the binary

pub mod commands;
pub mod report;

pub use commands::QueryCommand;
pub use report::Report;
