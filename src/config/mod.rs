//! Configuration for Greenroom.
//!
//! One TOML file at `~/.config/greenroom/config.toml`:
//!
//! ```toml
//! endpoint = "https://script.example.com/exec"
//! source = "live"
//! ```
//!
//! ## Precedence
//!
//! CLI flag > env var (`GR_SOURCE`, `GR_ENDPOINT`, merged into the flags
//! by clap) > config file > default. The default source is `live` when an
//! endpoint is configured and `mock` otherwise, so a fresh checkout works
//! without any setup.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Which bridge implementation backs this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// In-memory mock dataset
    Mock,
    /// HTTP bridge to the configured endpoint
    Live,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceKind::Mock => "mock",
            SourceKind::Live => "live",
        };
        write!(f, "{}", s)
    }
}

/// On-disk configuration. Every field is optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub source: Option<SourceKind>,
}

impl ConfigFile {
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::InvalidInput(format!("Bad config file: {}", e)))
    }
}

/// Path of the system config file, when a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("greenroom").join("config.toml"))
}

/// Load a config file from a specific path; a missing file is an empty
/// config.
pub fn load_from(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    ConfigFile::parse(&raw)
}

/// Load the system config file.
pub fn load_file() -> Result<ConfigFile> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(ConfigFile::default()),
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub source: SourceKind,
    pub endpoint: Option<String>,
}

/// Apply precedence over an already-loaded config file.
///
/// `live` without an endpoint from any layer is an error rather than a
/// request that could never be sent.
pub fn resolve_with(
    file: &ConfigFile,
    cli_source: Option<SourceKind>,
    cli_endpoint: Option<String>,
) -> Result<Resolved> {
    let endpoint = cli_endpoint.or_else(|| file.endpoint.clone());
    let source = cli_source.or(file.source).unwrap_or(if endpoint.is_some() {
        SourceKind::Live
    } else {
        SourceKind::Mock
    });
    if source == SourceKind::Live && endpoint.is_none() {
        return Err(Error::InvalidInput(
            "live source requires an endpoint (set --endpoint, GR_ENDPOINT, or the config file)"
                .to_string(),
        ));
    }
    Ok(Resolved { source, endpoint })
}

/// Load the config file and apply precedence.
pub fn resolve(cli_source: Option<SourceKind>, cli_endpoint: Option<String>) -> Result<Resolved> {
    let file = load_file()?;
    resolve_with(&file, cli_source, cli_endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ConfigFile::parse(
            "endpoint = \"https://script.example.com/exec\"\nsource = \"live\"\n",
        )
        .unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://script.example.com/exec"));
        assert_eq!(config.source, Some(SourceKind::Live));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ConfigFile::parse("").unwrap();
        assert!(config.endpoint.is_none());
        assert!(config.source.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(ConfigFile::parse("endpoint = [").is_err());
    }

    #[test]
    fn test_default_is_mock_without_endpoint() {
        let resolved = resolve_with(&ConfigFile::default(), None, None).unwrap();
        assert_eq!(resolved.source, SourceKind::Mock);
        assert!(resolved.endpoint.is_none());
    }

    #[test]
    fn test_default_is_live_with_endpoint() {
        let file = ConfigFile {
            endpoint: Some("https://x.example/exec".into()),
            source: None,
        };
        let resolved = resolve_with(&file, None, None).unwrap();
        assert_eq!(resolved.source, SourceKind::Live);
    }

    #[test]
    fn test_cli_flag_beats_file() {
        let file = ConfigFile {
            endpoint: Some("https://x.example/exec".into()),
            source: Some(SourceKind::Live),
        };
        let resolved = resolve_with(&file, Some(SourceKind::Mock), None).unwrap();
        assert_eq!(resolved.source, SourceKind::Mock);
    }

    #[test]
    fn test_cli_endpoint_beats_file() {
        let file = ConfigFile {
            endpoint: Some("https://file.example/exec".into()),
            source: None,
        };
        let resolved =
            resolve_with(&file, None, Some("https://flag.example/exec".into())).unwrap();
        assert_eq!(resolved.endpoint.as_deref(), Some("https://flag.example/exec"));
    }

    #[test]
    fn test_live_without_endpoint_is_an_error() {
        let err = resolve_with(&ConfigFile::default(), Some(SourceKind::Live), None).unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_load_from_reads_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "source = \"mock\"\n").unwrap();
        let config = load_from(&path).unwrap();
        assert_eq!(config.source, Some(SourceKind::Mock));
    }
}
