//! User configuration and vault discovery.
//!
//! Configuration lives in `$VLT_CONFIG` or `<config dir>/vlt/config.toml`:
//!
//! ```toml
//! default_vault = "Work"
//!
//! [vaults]
//! Work = "~/notes/work"
//! ```
//!
//! Vaults registered with the Obsidian app (its `obsidian.json`) are also
//! addressable by their folder name.

use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "VLT_CONFIG";

/// Environment variable naming the vault when `--vault` is absent.
pub const VAULT_ENV: &str = "VLT_VAULT";

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault used when neither `--vault` nor `VLT_VAULT` is given (name or path).
    pub default_vault: Option<String>,

    /// Named vaults.
    pub vaults: BTreeMap<String, PathBuf>,

    /// Location of Obsidian's `obsidian.json`, if not the platform default.
    pub obsidian_config: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ObsidianRegistry {
    #[serde(default)]
    vaults: HashMap<String, ObsidianVault>,
}

#[derive(Debug, Deserialize)]
struct ObsidianVault {
    path: PathBuf,
}

impl Config {
    /// Config file location: `$VLT_CONFIG`, else `<config dir>/vlt/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("vlt").join("config.toml")))
    }

    /// Load the config from its default location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse config TOML.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve the vault root from the CLI flag, `VLT_VAULT`, or `default_vault`.
    pub fn resolve_vault_path(&self, cli_vault: Option<&str>) -> Result<PathBuf> {
        let env_vault = std::env::var(VAULT_ENV).ok();
        self.resolve_vault_with(cli_vault, env_vault.as_deref())
    }

    /// Resolve the vault root with an explicit environment value.
    pub fn resolve_vault_with(
        &self,
        cli_vault: Option<&str>,
        env_vault: Option<&str>,
    ) -> Result<PathBuf> {
        let spec = cli_vault
            .or(env_vault)
            .or(self.default_vault.as_deref())
            .filter(|s| !s.trim().is_empty())
            .ok_or(VaultError::NoVaultSpecified)?;
        self.lookup_vault(spec.trim())
    }

    /// Look a vault up as a directory path, a configured name, or an Obsidian vault name.
    pub fn lookup_vault(&self, spec: &str) -> Result<PathBuf> {
        let as_path = expand_home(Path::new(spec));
        if as_path.is_dir() {
            return Ok(as_path);
        }

        if let Some(path) = self.vaults.get(spec) {
            return Ok(expand_home(path));
        }

        if let Some(path) = self.obsidian_vaults().remove(spec) {
            return Ok(path);
        }

        Err(VaultError::VaultNotFound(PathBuf::from(spec)))
    }

    /// Location of Obsidian's vault registry.
    pub fn obsidian_config_path(&self) -> Option<PathBuf> {
        self.obsidian_config
            .as_deref()
            .map(expand_home)
            .or_else(|| dirs::config_dir().map(|d| d.join("obsidian").join("obsidian.json")))
    }

    /// Vaults registered with Obsidian, keyed by folder name.
    ///
    /// An absent or unreadable registry yields no vaults.
    pub fn obsidian_vaults(&self) -> BTreeMap<String, PathBuf> {
        let Some(path) = self.obsidian_config_path() else {
            return BTreeMap::new();
        };
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no Obsidian registry");
                return BTreeMap::new();
            }
        };
        parse_obsidian_registry(&text).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "ignoring unreadable Obsidian registry"
            );
            BTreeMap::new()
        })
    }

    /// All known vaults. Configured names take precedence over Obsidian's.
    pub fn discover_vaults(&self) -> BTreeMap<String, PathBuf> {
        let mut vaults = self.obsidian_vaults();
        for (name, path) in &self.vaults {
            vaults.insert(name.clone(), expand_home(path));
        }
        vaults
    }
}

/// Parse Obsidian's `obsidian.json` into folder name → path.
pub fn parse_obsidian_registry(json: &str) -> Result<BTreeMap<String, PathBuf>> {
    let registry: ObsidianRegistry = serde_json::from_str(json)?;
    Ok(registry
        .vaults
        .into_values()
        .filter_map(|v| {
            let name = v.path.file_name()?.to_string_lossy().into_owned();
            Some((name, v.path))
        })
        .collect())
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let config = Config::parse(
            "default_vault = \"Work\"\n\n[vaults]\nWork = \"/tmp/work\"\nHome = \"/tmp/home\"\n",
        )
        .unwrap();
        assert_eq!(config.default_vault.as_deref(), Some("Work"));
        assert_eq!(config.vaults.len(), 2);
        assert_eq!(config.vaults["Home"], PathBuf::from("/tmp/home"));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(Config::parse("vaults = 3"), Err(VaultError::TomlParse(_))));
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_vault_precedence() {
        let cli = TempDir::new().unwrap();
        let env = TempDir::new().unwrap();
        let default = TempDir::new().unwrap();

        let config = Config {
            default_vault: Some(default.path().to_string_lossy().into_owned()),
            obsidian_config: Some(default.path().join("none.json")),
            ..Config::default()
        };

        let cli_path = cli.path().to_string_lossy().into_owned();
        let env_path = env.path().to_string_lossy().into_owned();

        assert_eq!(
            config.resolve_vault_with(Some(&cli_path), Some(&env_path)).unwrap(),
            cli.path()
        );
        assert_eq!(config.resolve_vault_with(None, Some(&env_path)).unwrap(), env.path());
        assert_eq!(config.resolve_vault_with(None, None).unwrap(), default.path());
    }

    #[test]
    fn test_resolve_vault_unspecified() {
        let config = Config::default();
        assert!(matches!(
            config.resolve_vault_with(None, None),
            Err(VaultError::NoVaultSpecified)
        ));
    }

    #[test]
    fn test_lookup_named_vault() {
        let dir = TempDir::new().unwrap();
        let mut config = Config {
            obsidian_config: Some(dir.path().join("none.json")),
            ..Config::default()
        };
        config.vaults.insert("Notes".to_string(), dir.path().to_path_buf());

        assert_eq!(config.lookup_vault("Notes").unwrap(), dir.path());
        assert!(matches!(config.lookup_vault("Other"), Err(VaultError::VaultNotFound(_))));
    }

    #[test]
    fn test_lookup_obsidian_vault() {
        let dir = TempDir::new().unwrap();
        let registry = dir.path().join("obsidian.json");
        let vault_path = dir.path().join("Claude");
        std::fs::write(
            &registry,
            serde_json::json!({
                "vaults": { "abc123": { "path": vault_path, "ts": 1, "open": true } }
            })
            .to_string(),
        )
        .unwrap();

        let config = Config {
            obsidian_config: Some(registry),
            ..Config::default()
        };
        assert_eq!(config.lookup_vault("Claude").unwrap(), vault_path);
        assert!(config.discover_vaults().contains_key("Claude"));
    }

    #[test]
    fn test_parse_obsidian_registry() {
        let json = r#"{"vaults":{"a":{"path":"/x/Work"},"b":{"path":"/y/Home","open":true}}}"#;
        let vaults = parse_obsidian_registry(json).unwrap();
        assert_eq!(
            vaults.into_iter().collect::<Vec<_>>(),
            vec![
                ("Home".to_string(), PathBuf::from("/y/Home")),
                ("Work".to_string(), PathBuf::from("/x/Work")),
            ]
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/notes")), home.join("notes"));
        }
    }
}
