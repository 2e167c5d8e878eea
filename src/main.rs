//! Resume screener: scores candidate resumes against job descriptions

mod cli;
mod config;
mod embedding;
mod error;
mod extract;
mod output;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, OutputFormat};
use config::Config;
use embedding::openai::OpenAiEmbeddings;
use error::{Result, ScreenerError};
use extract::fields::ResumeFields;
use log::{error, info};
use output::{ConsoleFormatter, JsonFormatter, OutputFormatter};
use scoring::ScoringEngine;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            info!("Starting candidate screening");

            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;
            let output_format = cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;

            let resume_fields = read_resume(&resume)?;
            let job_text = std::fs::read_to_string(&job)?;

            let provider = Arc::new(OpenAiEmbeddings::from_env(
                config.embedding.request_timeout_secs,
            )?);
            let engine = ScoringEngine::new(&config, provider)?;

            let result = engine.analyze(&resume_fields, &job_text).await?;
            info!(
                "Screening finished: score {} recommendation {}",
                result.score, result.recommendation
            );

            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(save.is_none(), detailed).format_result(&result)?
                }
                OutputFormat::Json => JsonFormatter::new(true).format_result(&result)?,
            };

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Result saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Scoring weights:");
                println!("  Technical:  {:.1}", config.scoring.technical_weight);
                println!("  Keywords:   {:.1}", config.scoring.keyword_weight);
                println!("  Experience: {:.1}", config.scoring.experience_weight);
                println!("  Embeddings: {:.1}", config.scoring.embedding_weight);
                println!("\nEmbedding:");
                println!("  Max input chars:   {}", config.embedding.max_input_chars);
                println!("  Calibration floor: {:.2}", config.embedding.calibration_floor);
                println!("  Calibration span:  {:.2}", config.embedding.calibration_span);
                println!("  Request timeout:   {}s", config.embedding.request_timeout_secs);
                println!("\nVocabulary:");
                for group in &config.vocabulary.technical_groups {
                    println!("  {}: {} terms", group.name, group.terms.len());
                }
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn read_resume(path: &PathBuf) -> Result<ResumeFields> {
    let raw = std::fs::read_to_string(path)?;
    let fields: ResumeFields = serde_json::from_str(&raw)?;
    Ok(fields)
}
