use crate::core::info_type::{Dialect, InfoType, DSM, DSM7};
use crate::core::report::Filters;
use crate::utils::error::Result;
use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{Args, Parser};
use std::path::{Path, PathBuf};

const ABOUT: &str = "Output certificate information on DSM (7.x) from the certificate archive.";

fn info_type_parser(dialect: &Dialect) -> PossibleValuesParser {
    PossibleValuesParser::new(
        dialect
            .types
            .iter()
            .map(|info_type| PossibleValue::new(info_type.tag).help(info_type.about)),
    )
}

/// Options shared by both command line dialects.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML file overriding the certificate store paths
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated result of argument parsing.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub info_type: &'static InfoType,
    pub filters: Filters,
}

pub trait CliArgs: Parser {
    fn dialect() -> &'static Dialect;
    fn common(&self) -> &CommonArgs;
    fn query_options(&self) -> Result<QueryOptions>;

    fn config_path(&self) -> Option<&Path> {
        self.common().config.as_deref()
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "get-cert-info-dsm7", version, about = ABOUT)]
pub struct Dsm7Args {
    /// Type of information to output
    #[arg(
        short = 't',
        long = "type",
        value_name = "INFO_TYPE",
        default_value = DSM7.default_tag,
        value_parser = info_type_parser(&DSM7),
    )]
    pub info_type: String,

    /// Only output data for this certificate ID if it exists.
    /// No more ID prefixes printed, useful for shell scripts.
    #[arg(short = 'c', long = "crt", value_name = "CERT")]
    pub crt: Option<String>,

    /// Only output data for this certificate description if it exists.
    /// No more ID prefixes printed, useful for shell scripts.
    #[arg(short = 'd', long = "dsc", value_name = "DESC")]
    pub dsc: Option<String>,

    /// Only output data for this service ID if it exists.
    /// No more service prefixes printed, useful for shell scripts.
    #[arg(short = 's', long = "srv", value_name = "SRVC")]
    pub srv: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CliArgs for Dsm7Args {
    fn dialect() -> &'static Dialect {
        &DSM7
    }

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn query_options(&self) -> Result<QueryOptions> {
        Ok(QueryOptions {
            info_type: DSM7.lookup(&self.info_type)?,
            filters: Filters::new(self.crt.clone(), self.dsc.clone(), self.srv.clone()),
        })
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "get-dsm-cert-info", version, about = ABOUT)]
pub struct DsmArgs {
    /// Type of information to output
    #[arg(
        short = 't',
        long = "type",
        value_name = "INFO_TYPE",
        default_value = DSM.default_tag,
        value_parser = info_type_parser(&DSM),
    )]
    pub info_type: String,

    /// Only output data for this ID if it exists.
    /// No more ID prefixes printed, useful for shell scripts.
    #[arg(short = 'i', long = "id", value_name = "ID")]
    pub id: Option<String>,

    /// Only output data for certificate with this description if it exists.
    /// No more ID prefixes printed, useful for shell scripts.
    #[arg(short = 'd', long = "desc", value_name = "DESC")]
    pub desc: Option<String>,

    /// Only output data for this service if it exists.
    /// No more service prefixes printed, useful for shell scripts.
    #[arg(short = 's', long = "srv", value_name = "SRV")]
    pub srv: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CliArgs for DsmArgs {
    fn dialect() -> &'static Dialect {
        &DSM
    }

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn query_options(&self) -> Result<QueryOptions> {
        Ok(QueryOptions {
            info_type: DSM.lookup(&self.info_type)?,
            filters: Filters::new(self.id.clone(), self.desc.clone(), self.srv.clone()),
        })
    }
}
