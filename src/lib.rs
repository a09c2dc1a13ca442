pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::fs_store::FsCertStore;
pub use crate::config::cli::{Dsm7Args, DsmArgs};
pub use crate::config::CertPaths;
pub use crate::core::info_type::{Dialect, InfoType, Query, DSM, DSM7};
pub use crate::core::inspector::CertInspector;
pub use crate::core::report::Filters;
pub use crate::utils::error::{CertInfoError, Result};
