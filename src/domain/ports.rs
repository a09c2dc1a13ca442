use crate::domain::model::{CertInfo, ServiceEntry};
use crate::utils::error::Result;
use std::path::Path;

/// Read access to the certificate store files.
pub trait CertStore {
    fn load_info(&self) -> Result<CertInfo>;
    fn load_default(&self) -> Result<String>;
    fn load_services(&self) -> Result<Vec<ServiceEntry>>;
}

/// Directories used to build the paths that get printed.
pub trait PathProvider {
    fn system_root(&self) -> &Path;
    fn archive_dir(&self) -> &Path;
    fn pkg_root(&self) -> &Path;
}
