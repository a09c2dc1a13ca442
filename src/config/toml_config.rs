use crate::config::{CertPaths, DEFAULT_PKG_ROOT, DEFAULT_SYSTEM_ROOT};
use crate::utils::error::{CertInfoError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

/// Optional configuration file. Every key falls back to the DSM default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub paths: Option<PathsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    pub system_root: Option<PathBuf>,
    pub archive_dir: Option<PathBuf>,
    pub pkg_root: Option<PathBuf>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| CertInfoError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CertInfoError::ConfigParse { message, .. } => CertInfoError::ConfigParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CertInfoError::ConfigParse {
            path: PathBuf::from("<inline>"),
            message: e.message().to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Resolves the configured paths, filling gaps with defaults.
    pub fn cert_paths(&self) -> CertPaths {
        let section = self.paths.clone().unwrap_or_default();
        let system_root = section
            .system_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_ROOT));
        let pkg_root = section
            .pkg_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PKG_ROOT));

        let mut paths = CertPaths::with_system_root(system_root, pkg_root);
        if let Some(archive_dir) = section.archive_dir {
            paths.archive_dir = archive_dir;
        }
        paths
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.cert_paths().validate()
    }
}

/// Loads the store paths from `config` if given, otherwise the DSM defaults.
pub fn load_cert_paths(config: Option<&Path>) -> Result<CertPaths> {
    let paths = match config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            config.cert_paths()
        }
        None => CertPaths::default(),
    };
    tracing::debug!("Using certificate store paths: {:?}", paths);
    Ok(paths)
}
