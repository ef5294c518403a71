use anyhow::Context;
use listing_pricing::{AppError, Config, evaluate, init_logger_with_file, read_input};
use shared::error::ApiResponse;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the input was read but failed validation
const EXIT_INVALID: u8 = 2;

fn main() -> ExitCode {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_json,
        config.log_dir.as_deref(),
    );

    // 2. Input path: first argument, stdin otherwise
    let path = std::env::args_os().nth(1).map(PathBuf::from);

    match run(path, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            tracing::error!("Pricing report failed: {:#}", e);
            let body: ApiResponse<()> = match e.downcast_ref::<AppError>() {
                Some(err) => ApiResponse::error(err),
                None => AppError::internal(format!("{e:#}")).into(),
            };
            eprintln!("{}", serde_json::to_string(&body).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<PathBuf>, config: &Config) -> anyhow::Result<bool> {
    let source = path
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    let input = read_input(path.as_deref())
        .with_context(|| format!("failed to read price input from {source}"))?;

    let report = evaluate(input, config);
    tracing::info!(
        valid = report.is_valid(),
        errors = report.errors.len(),
        "Pricing report ready"
    );

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(report.is_valid())
}
