use dsm_cert_info::config::cli::DsmArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    dsm_cert_info::app::main::<DsmArgs>()
}
