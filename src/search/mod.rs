//! External search tools
//!
//! `fd` for filename globs, `rg --json` for content matches. Both run with the
//! vault as their working directory.

pub mod fd;
mod process;
pub mod ripgrep;

pub use process::Tools;
