use anyhow::Result;
use ats_resume_trainer::{
    config::Config, console, engine::ConversationEngine, validator,
    validator::ValidationMetrics,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the chat on stdout stays readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ats_resume_trainer=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let engine = ConversationEngine::new(validator::from_config(&config)?);

    info!("Starting ATS resume trainer (type /quit to leave, /history for the transcript)");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let session = console::run(&engine, stdin, std::io::stdout()).await?;

    let report = ValidationMetrics::global().report();
    info!(
        "Session finished after {} exercises: {} validations, {:.0}% passed, {} classifier failures",
        session.exercise_count(),
        report.validations,
        report.pass_rate,
        report.classifier_failures
    );

    Ok(())
}
