//! osearch library
//!
//! Alfred script filter for Obsidian vaults.
//!
//! # Modules
//!
//! - `core`: request resolution, vault registry, result shaping
//! - `search`: `fd` and `rg` invocation and output parsing
//! - `commands`: filename and content search pipelines

pub mod commands;
pub mod core;
pub mod search;

// Re-exports for convenience
pub use crate::core::alfred::{Item, ScriptFilter};
pub use crate::core::error::SearchError;
pub use crate::core::registry::{RegisteredVault, VaultRegistry};
pub use crate::core::request::{RequestArgs, SearchMode, SearchRequest};
pub use crate::core::text::{fruncate, title_for, without_md};
pub use crate::core::url::obsidian_url;
pub use search::Tools;
