use crate::adapters::fs_store::FsCertStore;
use crate::config::cli::CliArgs;
use crate::config::toml_config::load_cert_paths;
use crate::core::inspector::CertInspector;
use crate::utils::error::Result;
use crate::utils::logger;
use std::process::ExitCode;

/// Loads configuration, queries the store and prints to stdout.
pub fn run<A: CliArgs>(args: &A) -> Result<()> {
    let options = args.query_options()?;
    let paths = load_cert_paths(args.config_path())?;

    let inspector = CertInspector::new(FsCertStore::new(paths.clone()), paths);
    let stdout = std::io::stdout();
    inspector.print(options.info_type, &options.filters, &mut stdout.lock())
}

/// Entry point shared by both binaries.
pub fn main<A: CliArgs>() -> ExitCode {
    let args = A::parse();

    // Logging goes to stderr, stdout is reserved for results
    logger::init_cli_logger(args.common().verbose);
    tracing::debug!("Starting {}", A::dialect().name);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // warn is the default level, keep the details out of plain runs
            tracing::debug!(
                "❌ {} failed: {:?} (Category: {:?})",
                A::dialect().name,
                e,
                e.category()
            );

            eprintln!("❌ {}: {}", A::dialect().name, e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // usage and config problems exit 2 like clap, store failures 1
            ExitCode::from(e.exit_code())
        }
    }
}
