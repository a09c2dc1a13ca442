use dsm_cert_info::config::cli::Dsm7Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    dsm_cert_info::app::main::<Dsm7Args>()
}
