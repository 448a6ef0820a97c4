use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Deserialize;

use super::error::{Result, SearchError};

/// One entry of Obsidian's `obsidian.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredVault {
    pub path: String,
    /// Last opened, in milliseconds since the epoch.
    #[serde(default)]
    pub ts: i64,
    #[serde(default)]
    pub open: bool,
}

impl RegisteredVault {
    pub fn last_opened(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.ts).map(|t| t.with_timezone(&Local))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VaultRegistry {
    #[serde(default)]
    pub vaults: BTreeMap<String, RegisteredVault>,
    #[serde(skip)]
    pub source: PathBuf,
}

impl VaultRegistry {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SearchError::RegistryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let mut registry: Self =
            serde_json::from_str(content).map_err(|source| SearchError::RegistryMalformed {
                path: path.to_path_buf(),
                content: content.to_string(),
                source,
            })?;
        registry.source = path.to_path_buf();
        Ok(registry)
    }

    /// The vault Obsidian currently has open, if any.
    ///
    /// Iteration order of the registry means nothing, so two open vaults are
    /// reported instead of picking one of them.
    pub fn open_vault(&self) -> Result<Option<(&str, &RegisteredVault)>> {
        let open: Vec<(&str, &RegisteredVault)> = self
            .vaults
            .iter()
            .filter(|(_, vault)| vault.open)
            .map(|(id, vault)| (id.as_str(), vault))
            .collect();

        match open.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            _ => Err(SearchError::AmbiguousVault {
                path: self.source.clone(),
                candidates: open
                    .iter()
                    .map(|(id, vault)| format!("{} ({})", id, vault.path))
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"{
        "vaults": {
            "8f2b0c1d9e3a4f56": {"path": "/vaults/personal", "ts": 1704067200000},
            "work": {"path": "/vaults/work", "ts": 1704153600000, "open": true}
        },
        "frame": "hidden"
    }"#;

    #[test]
    fn test_open_vault() -> Result<()> {
        let registry = VaultRegistry::parse(Path::new("obsidian.json"), REGISTRY)?;
        assert_eq!(registry.vaults.len(), 2);

        let (id, vault) = registry.open_vault()?.expect("open vault");
        assert_eq!(id, "work");
        assert_eq!(vault.path, "/vaults/work");
        assert_eq!(vault.last_opened().map(|t| t.timestamp()), Some(1704153600));
        Ok(())
    }

    #[test]
    fn test_no_open_vault() -> Result<()> {
        let registry = VaultRegistry::parse(
            Path::new("obsidian.json"),
            r#"{"vaults": {"a": {"path": "/a", "ts": 1, "open": false}}}"#,
        )?;
        assert!(registry.open_vault()?.is_none());

        let empty = VaultRegistry::parse(Path::new("obsidian.json"), "{}")?;
        assert!(empty.open_vault()?.is_none());
        Ok(())
    }

    #[test]
    fn test_ambiguous_open_vaults() -> Result<()> {
        let registry = VaultRegistry::parse(
            Path::new("obsidian.json"),
            r#"{"vaults": {
                "b": {"path": "/b", "open": true},
                "a": {"path": "/a", "open": true}
            }}"#,
        )?;

        match registry.open_vault() {
            Err(SearchError::AmbiguousVault { candidates, .. }) => {
                assert_eq!(candidates, vec!["a (/a)", "b (/b)"]);
            }
            other => panic!("expected AmbiguousVault, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_malformed_registry() {
        let err = VaultRegistry::parse(Path::new("obsidian.json"), "{not json").unwrap_err();
        assert!(matches!(err, SearchError::RegistryMalformed { .. }));
        assert!(err.to_string().contains("{not json"));
    }

    #[test]
    fn test_load_missing_registry() {
        let dir = tempfile::tempdir().unwrap();
        let err = VaultRegistry::load(&dir.path().join("obsidian.json")).unwrap_err();
        assert!(matches!(err, SearchError::RegistryUnreadable { .. }));
    }

    #[test]
    fn test_load_from_disk() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obsidian.json");
        fs::write(&path, REGISTRY).unwrap();

        let registry = VaultRegistry::load(&path)?;
        assert_eq!(registry.source, path);
        assert!(registry.open_vault()?.is_some());
        Ok(())
    }
}
