use crate::config::CertPaths;
use crate::domain::model::{CertInfo, ServiceEntry};
use crate::domain::ports::CertStore;
use crate::utils::error::{CertInfoError, Result};
use std::fs;
use std::path::Path;

/// Reads the certificate archive files from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsCertStore {
    paths: CertPaths,
}

impl FsCertStore {
    pub fn new(paths: CertPaths) -> Self {
        Self { paths }
    }

    fn read(path: &Path) -> Result<String> {
        tracing::debug!("Reading {}", path.display());
        fs::read_to_string(path).map_err(|e| CertInfoError::io(path, e))
    }
}

impl CertStore for FsCertStore {
    fn load_info(&self) -> Result<CertInfo> {
        let path = self.paths.info_path();
        let content = Self::read(&path)?;
        CertInfo::from_json_str(&content).map_err(|e| CertInfoError::parse(&path, e))
    }

    /// First line of DEFAULT, without the newline.
    fn load_default(&self) -> Result<String> {
        let content = Self::read(&self.paths.default_path())?;
        Ok(content.split('\n').next().unwrap_or_default().to_string())
    }

    fn load_services(&self) -> Result<Vec<ServiceEntry>> {
        let path = self.paths.services_path();
        let content = Self::read(&path)?;
        serde_json::from_str(&content).map_err(|e| CertInfoError::parse(&path, e))
    }
}
