use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match side_scroller::run_with_config().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "runner failed");
            ExitCode::FAILURE
        }
    }
}
