//! Check a single resume bullet point without starting a chat
//!
//! Usage:
//!   cargo run --bin check -- "Managed a team of five and increased output by 20%"
//!   cargo run --bin check -- --lang id "Mengelola tim berisi lima orang ..."
//!
//! Uses the same validator selection as the chat (VALIDATOR, CLASSIFIER_*).

use anyhow::{bail, Context, Result};
use ats_resume_trainer::{config::Config, i18n::Language, validator};

struct Args {
    language: Language,
    sentence: String,
}

fn parse_args() -> Result<Args> {
    let mut language = Language::canonical();
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" | "-l" => {
                let code = args.next().context("--lang requires a language code (en or id)")?;
                language = Language::from_code(&code)?;
            }
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        bail!("Usage: check [--lang en|id] <sentence...>");
    }

    Ok(Args {
        language,
        sentence: words.join(" "),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ats_resume_trainer=warn".parse()?),
        )
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;
    let validator = validator::from_config(&config)?;

    let result = validator.validate(&args.sentence, args.language).await;

    let verdict = serde_json::to_string(&result.verdict)?;
    println!("Verdict: {}", verdict.trim_matches('"'));
    println!("{}", result.feedback);

    Ok(())
}
