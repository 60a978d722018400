use clap::Parser;
use job_match::core::ConfigProvider;
use job_match::utils::{logger, validation::Validate};
use job_match::{app, CliConfig, MatchError, RunSummary, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting job-match");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(mut config) => {
                    config.apply_cli_overrides(&cli);
                    validate_and_run(&config).await
                }
                Err(e) => Err(e),
            }
        }
        None => validate_and_run(&cli).await,
    };

    match outcome {
        Ok(summary) => {
            tracing::info!(
                "✅ Matched {} members against {} jobs ({} with recommendations)",
                summary.members,
                summary.jobs,
                summary.members_with_matches
            );
            tracing::info!("📁 Output: {}", summary.output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Matching failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn validate_and_run<C: ConfigProvider + Validate>(config: &C) -> Result<RunSummary, MatchError> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");
    app::run(config).await
}
