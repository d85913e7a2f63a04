//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod init;
pub mod serve;

pub use args::{BuildArgs, CheckArgs, Cli, Commands};
