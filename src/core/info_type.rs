//! Output types and the two CLI dialects that name them.
//!
//! A dialect is a table of tags, each mapping to a [`Query`]. Both binaries
//! share the same queries and differ only in the table they parse against.

use crate::domain::model::ServiceEntry;
use crate::domain::ports::PathProvider;
use crate::utils::error::{CertInfoError, Result};
use std::path::PathBuf;

/// Which store file a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Info,
    Default,
    Services,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertField {
    Id,
    Desc,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    Id,
    CertPath,
    IsPkg,
    DisplayName,
    Owner,
    Subscriber,
}

impl ServiceField {
    pub fn extract(self, service: &ServiceEntry, paths: &impl PathProvider) -> String {
        match self {
            Self::Id => service.service.clone(),
            Self::CertPath => service_cert_path(service, paths).display().to_string(),
            Self::IsPkg => (if service.is_pkg { "True" } else { "False" }).to_string(),
            Self::DisplayName => service.display_name.clone(),
            Self::Owner => service.owner.clone(),
            Self::Subscriber => service.subscriber.clone(),
        }
    }

    /// The ID column needs no service prefix, it already is the service.
    pub fn takes_service_prefix(self) -> bool {
        self != Self::Id
    }
}

/// Where the certificate copy of a service lives: package root for
/// package-owned services, system root otherwise.
pub fn service_cert_path(service: &ServiceEntry, paths: &impl PathProvider) -> PathBuf {
    let root = if service.is_pkg {
        paths.pkg_root()
    } else {
        paths.system_root()
    };
    root.join(&service.subscriber).join(&service.service)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Cert(CertField),
    CertService(ServiceField),
    DefaultCert,
    Service(ServiceField),
}

impl Query {
    pub fn source(self) -> DataSource {
        match self {
            Self::Cert(_) | Self::CertService(_) => DataSource::Info,
            Self::DefaultCert => DataSource::Default,
            Self::Service(_) => DataSource::Services,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoType {
    pub tag: &'static str,
    pub about: &'static str,
    pub query: Query,
}

const fn info_type(tag: &'static str, about: &'static str, query: Query) -> InfoType {
    InfoType { tag, about, query }
}

#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub name: &'static str,
    pub default_tag: &'static str,
    pub types: &'static [InfoType],
}

impl Dialect {
    pub fn lookup(&self, tag: &str) -> Result<&'static InfoType> {
        self.types
            .iter()
            .find(|info_type| info_type.tag == tag)
            .ok_or_else(|| CertInfoError::UnknownInfoType {
                tag: tag.to_string(),
                valid: self.tags().map(str::to_string).collect(),
            })
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        self.types.iter().map(|info_type| info_type.tag)
    }
}

pub const DSM7: Dialect = Dialect {
    name: "get-cert-info-dsm7",
    default_tag: "cert-desc",
    types: &[
        info_type("cert-desc", "Description of Certificate IDs", Query::Cert(CertField::Desc)),
        info_type("cert-id", "Certificate IDs", Query::Cert(CertField::Id)),
        info_type("cert-path", "Path of Certificate IDs", Query::Cert(CertField::Path)),
        info_type(
            "cert-srv",
            "Services IDs of Certificate IDs",
            Query::CertService(ServiceField::Id),
        ),
        info_type(
            "cert-srv-ispkg",
            "isPkg Flag of Service IDs of Certificate IDs",
            Query::CertService(ServiceField::IsPkg),
        ),
        info_type(
            "cert-srv-name",
            "Display Name of Service IDs of Certificate IDs",
            Query::CertService(ServiceField::DisplayName),
        ),
        info_type(
            "cert-srv-owner",
            "Owner of Service IDs of Certificate IDs",
            Query::CertService(ServiceField::Owner),
        ),
        info_type(
            "cert-srv-path",
            "Certificate Path of Service IDs of Certificate IDs",
            Query::CertService(ServiceField::CertPath),
        ),
        info_type(
            "cert-srv-subscr",
            "Subscriber of Service IDs of Certificate IDs",
            Query::CertService(ServiceField::Subscriber),
        ),
        info_type("default", "Default Certificate ID", Query::DefaultCert),
        info_type("srv-id", "Service IDs", Query::Service(ServiceField::Id)),
        info_type(
            "srv-certpath",
            "Certificate Path of Service IDs",
            Query::Service(ServiceField::CertPath),
        ),
        info_type("srv-ispkg", "isPkg Flag of Service IDs", Query::Service(ServiceField::IsPkg)),
        info_type(
            "srv-name",
            "Display Name of Service IDs",
            Query::Service(ServiceField::DisplayName),
        ),
        info_type("srv-owner", "Owner of Service IDs", Query::Service(ServiceField::Owner)),
        info_type(
            "srv-subscr",
            "Subscriber of Service IDs",
            Query::Service(ServiceField::Subscriber),
        ),
    ],
};

pub const DSM: Dialect = Dialect {
    name: "get-dsm-cert-info",
    default_tag: "id-desc",
    types: &[
        info_type("id", "ID of Certificate", Query::Cert(CertField::Id)),
        info_type("id-desc", "Description of Certificate ID", Query::Cert(CertField::Desc)),
        info_type("id-path", "Path of Certificate ID", Query::Cert(CertField::Path)),
        info_type("id-srv", "Services of Certificate ID", Query::CertService(ServiceField::Id)),
        info_type(
            "id-srv-path",
            "Path of Services for Certificate ID",
            Query::CertService(ServiceField::CertPath),
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CertPaths;

    fn service(is_pkg: bool) -> ServiceEntry {
        ServiceEntry {
            service: "WebStation".to_string(),
            is_pkg,
            display_name: "Web Station".to_string(),
            owner: "http".to_string(),
            subscriber: "WebStation".to_string(),
        }
    }

    #[test]
    fn test_default_tags_exist() {
        for dialect in [DSM, DSM7] {
            assert!(dialect.lookup(dialect.default_tag).is_ok(), "{}", dialect.name);
        }
    }

    #[test]
    fn test_tags_are_unique() {
        for dialect in [DSM, DSM7] {
            let mut tags: Vec<_> = dialect.tags().collect();
            let count = tags.len();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), count, "{}", dialect.name);
        }
    }

    #[test]
    fn test_dsm_is_subset_of_dsm7() {
        let dsm7_queries: Vec<Query> = DSM7.types.iter().map(|t| t.query).collect();
        for info_type in DSM.types {
            assert!(dsm7_queries.contains(&info_type.query), "{}", info_type.tag);
        }
        assert_eq!(
            DSM.lookup("id-srv-path").unwrap().query,
            DSM7.lookup("cert-srv-path").unwrap().query
        );
    }

    #[test]
    fn test_unknown_tag_lists_choices() {
        let err = DSM.lookup("cert-id").unwrap_err();
        match err {
            CertInfoError::UnknownInfoType { tag, valid } => {
                assert_eq!(tag, "cert-id");
                assert_eq!(valid, vec!["id", "id-desc", "id-path", "id-srv", "id-srv-path"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sources() {
        assert_eq!(DSM7.lookup("cert-srv-owner").unwrap().query.source(), DataSource::Info);
        assert_eq!(DSM7.lookup("default").unwrap().query.source(), DataSource::Default);
        assert_eq!(DSM7.lookup("srv-name").unwrap().query.source(), DataSource::Services);
    }

    #[test]
    fn test_service_cert_path_by_owner() {
        let paths = CertPaths::default();
        assert_eq!(
            service_cert_path(&service(true), &paths),
            PathBuf::from("/usr/local/etc/certificate/WebStation/WebStation")
        );
        assert_eq!(
            service_cert_path(&service(false), &paths),
            PathBuf::from("/usr/syno/etc/certificate/WebStation/WebStation")
        );
    }

    #[test]
    fn test_is_pkg_rendering() {
        let paths = CertPaths::default();
        assert_eq!(ServiceField::IsPkg.extract(&service(true), &paths), "True");
        assert_eq!(ServiceField::IsPkg.extract(&service(false), &paths), "False");
    }
}
