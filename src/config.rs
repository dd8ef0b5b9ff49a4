use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SumdConfig {
    pub port: Option<u16>,
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("sumd.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("sumd.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SumdConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SumdConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SumdConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sumd.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_write_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sumd.toml");

        let config = SumdConfig {
            port: Some(8080),
            database: Some("data/sumd.db".to_string()),
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.port, Some(8080));
        assert_eq!(loaded.database.as_deref(), Some("data/sumd.db"));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sumd.toml");

        write_config(&path, &SumdConfig::default(), false).unwrap();
        assert!(write_config(&path, &SumdConfig::default(), false).is_err());
        assert!(write_config(&path, &SumdConfig::default(), true).is_ok());
    }
}
