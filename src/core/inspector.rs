use crate::core::info_type::{DataSource, InfoType, Query};
use crate::core::report::{self, Filters};
use crate::domain::ports::{CertStore, PathProvider};
use crate::utils::error::{CertInfoError, Result};
use std::io::Write;

pub struct CertInspector<S: CertStore, P: PathProvider> {
    store: S,
    paths: P,
}

impl<S: CertStore, P: PathProvider> CertInspector<S, P> {
    pub fn new(store: S, paths: P) -> Self {
        Self { store, paths }
    }

    /// Loads the file behind `info_type` and renders every output line.
    /// Nothing is returned unless the whole source loaded cleanly.
    pub fn run(&self, info_type: &InfoType, filters: &Filters) -> Result<Vec<String>> {
        tracing::debug!(
            "Running '{}' ({:?}) with filters {:?}",
            info_type.tag,
            info_type.query,
            filters
        );

        let lines = match info_type.query {
            Query::Cert(field) => {
                let info = self.store.load_info()?;
                tracing::debug!("Loaded {} certificates", info.len());
                report::render_cert_field(&info, field, filters, &self.paths)
            }
            Query::CertService(field) => {
                let info = self.store.load_info()?;
                tracing::debug!("Loaded {} certificates", info.len());
                report::render_cert_services(&info, field, filters, &self.paths)
            }
            Query::DefaultCert => report::render_default(&self.store.load_default()?),
            Query::Service(field) => {
                let services = self.store.load_services()?;
                tracing::debug!("Loaded {} services", services.len());
                report::render_services(&services, field, filters, &self.paths)
            }
        };

        if info_type.query.source() == DataSource::Default && !filters.is_empty() {
            tracing::warn!("Filters are ignored for '{}'", info_type.tag);
        }

        tracing::debug!("Rendered {} lines", lines.len());
        Ok(lines)
    }

    /// Runs the query and writes the lines to `out`.
    pub fn print<W: Write>(
        &self,
        info_type: &InfoType,
        filters: &Filters,
        out: &mut W,
    ) -> Result<()> {
        let lines = self.run(info_type, filters)?;
        for line in &lines {
            writeln!(out, "{}", line).map_err(CertInfoError::Output)?;
        }
        out.flush().map_err(CertInfoError::Output)
    }
}
