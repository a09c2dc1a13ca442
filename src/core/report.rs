use crate::core::info_type::{CertField, ServiceField};
use crate::domain::model::{CertInfo, CertificateRecord, ServiceEntry};
use crate::domain::ports::PathProvider;

/// Equality filters from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    cert_id: Option<String>,
    desc: Option<String>,
    service: Option<String>,
}

impl Filters {
    /// Normalizes raw option values. The certificate ID is trimmed and, like
    /// the service ID, ignored when empty. An empty description is a real
    /// filter: it selects certificates without a description.
    pub fn new(cert_id: Option<String>, desc: Option<String>, service: Option<String>) -> Self {
        Self {
            cert_id: cert_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            desc,
            service: service.filter(|srv| !srv.is_empty()),
        }
    }

    pub fn cert_id(&self) -> Option<&str> {
        self.cert_id.as_deref()
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.cert_id.is_none() && self.desc.is_none() && self.service.is_none()
    }

    /// At most one certificate can match, so its ID adds nothing.
    pub fn print_cert_prefix(&self) -> bool {
        self.cert_id.is_none() && self.desc.is_none()
    }

    pub fn print_service_prefix(&self) -> bool {
        self.service.is_none()
    }

    pub fn matches_cert(&self, id: &str, record: &CertificateRecord) -> bool {
        self.cert_id().is_none_or(|wanted| wanted == id)
            && self.desc().is_none_or(|wanted| wanted == record.desc)
    }

    pub fn matches_service(&self, service: &ServiceEntry) -> bool {
        self.service().is_none_or(|wanted| wanted == service.service)
    }
}

fn line(prefixes: &[Option<&str>], value: &str) -> String {
    let mut out = String::new();
    for prefix in prefixes.iter().flatten() {
        out.push_str(prefix);
        out.push_str(": ");
    }
    out.push_str(value);
    out
}

/// One line per matching certificate.
pub fn render_cert_field(
    info: &CertInfo,
    field: CertField,
    filters: &Filters,
    paths: &impl PathProvider,
) -> Vec<String> {
    info.iter()
        .filter(|(id, record)| filters.matches_cert(id, record))
        .map(|(id, record)| {
            let cert_prefix = filters.print_cert_prefix().then_some(id);
            match field {
                CertField::Id => id.to_string(),
                CertField::Desc => line(&[cert_prefix], &record.desc),
                CertField::Path => {
                    let path = paths.archive_dir().join(id);
                    line(&[cert_prefix], &path.display().to_string())
                }
            }
        })
        .collect()
}

/// One line per matching service of each matching certificate.
pub fn render_cert_services(
    info: &CertInfo,
    field: ServiceField,
    filters: &Filters,
    paths: &impl PathProvider,
) -> Vec<String> {
    let mut lines = Vec::new();
    for (id, record) in info.iter().filter(|(id, record)| filters.matches_cert(id, record)) {
        let cert_prefix = filters.print_cert_prefix().then_some(id);
        for service in record.services.iter().filter(|s| filters.matches_service(s)) {
            let service_prefix = (field.takes_service_prefix() && filters.print_service_prefix())
                .then_some(service.service.as_str());
            lines.push(line(
                &[cert_prefix, service_prefix],
                &field.extract(service, paths),
            ));
        }
    }
    lines
}

/// One line per matching entry of the SERVICES list.
pub fn render_services(
    services: &[ServiceEntry],
    field: ServiceField,
    filters: &Filters,
    paths: &impl PathProvider,
) -> Vec<String> {
    services
        .iter()
        .filter(|service| filters.matches_service(service))
        .map(|service| {
            let service_prefix = (field.takes_service_prefix() && filters.print_service_prefix())
                .then_some(service.service.as_str());
            line(&[service_prefix], &field.extract(service, paths))
        })
        .collect()
}

pub fn render_default(default_id: &str) -> Vec<String> {
    vec![default_id.to_string()]
}
