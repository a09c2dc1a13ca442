pub mod info_type;
pub mod inspector;
pub mod report;

pub use crate::domain::model::{CertInfo, CertificateRecord, ServiceEntry};
pub use crate::domain::ports::{CertStore, PathProvider};
pub use crate::utils::error::Result;
