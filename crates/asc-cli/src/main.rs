use asc_cli::{build_cli, execute, init_tracing, leaf};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    if let Err(e) = init_tracing(leaf(&matches).get_flag("log-json")) {
        eprintln!("warning: {e:#}");
    }

    match execute(&matches).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
