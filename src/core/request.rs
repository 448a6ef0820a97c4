use std::path::{Path, PathBuf};

use colored::*;

use super::error::{Result, SearchError};
use super::paths::expand_home;
use super::registry::VaultRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Filename,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub directory: PathBuf,
    pub vault: String,
    pub mode: SearchMode,
}

/// Raw invocation parameters, before any defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    pub words: Vec<String>,
    pub vault: Option<String>,
    pub path: Option<String>,
    pub mode: SearchMode,
    pub verbose: bool,
}

impl SearchRequest {
    /// Build a request from the command line, consulting the vault registry
    /// only when the vault name or path was not given.
    pub fn resolve(args: RequestArgs, registry_path: &Path) -> Result<Self> {
        let term = args.words.join(" ");
        if term.is_empty() {
            return Err(SearchError::MissingTerm);
        }

        let mut vault = args.vault.filter(|v| !v.is_empty());
        let mut path = args.path.filter(|p| !p.is_empty());

        if vault.is_none() || path.is_none() {
            let registry = VaultRegistry::load(registry_path)?;
            if let Some((id, default)) = registry.open_vault()? {
                if args.verbose {
                    let opened = default
                        .last_opened()
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "never".to_string());
                    eprintln!(
                        "{}",
                        format!("open vault {} at {} (last opened {})", id, default.path, opened)
                            .dimmed()
                    );
                }
                vault.get_or_insert_with(|| id.to_string());
                path.get_or_insert_with(|| default.path.clone());
            }
        }

        let vault = vault.ok_or_else(|| SearchError::MissingVaultName {
            registry: registry_path.to_path_buf(),
        })?;
        let path = path.ok_or_else(|| SearchError::MissingVaultPath {
            registry: registry_path.to_path_buf(),
        })?;

        Ok(Self {
            term,
            directory: expand_home(&path),
            vault,
            mode: args.mode,
        })
    }
}
