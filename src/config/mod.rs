pub mod cli;
pub mod toml_config;

use crate::domain::ports::PathProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SYSTEM_ROOT: &str = "/usr/syno/etc/certificate";
pub const DEFAULT_PKG_ROOT: &str = "/usr/local/etc/certificate";
pub const ARCHIVE_DIR_NAME: &str = "_archive";

pub const INFO_FILE: &str = "INFO";
pub const DEFAULT_FILE: &str = "DEFAULT";
pub const SERVICES_FILE: &str = "SERVICES";

/// Locations of the certificate store on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertPaths {
    pub system_root: PathBuf,
    pub archive_dir: PathBuf,
    pub pkg_root: PathBuf,
}

impl CertPaths {
    /// Paths rooted at `system_root`, with the archive in its usual subdirectory.
    pub fn with_system_root(system_root: impl Into<PathBuf>, pkg_root: impl Into<PathBuf>) -> Self {
        let system_root = system_root.into();
        Self {
            archive_dir: system_root.join(ARCHIVE_DIR_NAME),
            system_root,
            pkg_root: pkg_root.into(),
        }
    }

    pub fn info_path(&self) -> PathBuf {
        self.archive_dir.join(INFO_FILE)
    }

    pub fn default_path(&self) -> PathBuf {
        self.archive_dir.join(DEFAULT_FILE)
    }

    pub fn services_path(&self) -> PathBuf {
        self.archive_dir.join(SERVICES_FILE)
    }
}

impl Default for CertPaths {
    fn default() -> Self {
        Self::with_system_root(DEFAULT_SYSTEM_ROOT, DEFAULT_PKG_ROOT)
    }
}

impl PathProvider for CertPaths {
    fn system_root(&self) -> &Path {
        &self.system_root
    }

    fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }

    fn pkg_root(&self) -> &Path {
        &self.pkg_root
    }
}

impl Validate for CertPaths {
    fn validate(&self) -> Result<()> {
        validate_path("paths.system_root", &self.system_root)?;
        validate_path("paths.archive_dir", &self.archive_dir)?;
        validate_path("paths.pkg_root", &self.pkg_root)?;
        Ok(())
    }
}
