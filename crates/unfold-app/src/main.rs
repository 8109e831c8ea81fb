mod attachment;
mod cli;
mod host;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use unfold_ai::{ApiKeySource, GeminiClient, GeminiConfig, TutorSession, TutorSettings};
use unfold_common::UnfoldError;
use unfold_config::UnfoldConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Existing variables are never overridden.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/unfold-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim().trim_start_matches("export ").trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log filter {directive:?} ({e}), falling back to info");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the session the host owns for the rest of the process.
fn build_session(config: &UnfoldConfig, args: &cli::Args) -> Result<TutorSession, UnfoldError> {
    let provider = &config.provider;
    let client = GeminiClient::new(
        GeminiConfig::new(ApiKeySource::env(provider.api_key_env.iter().cloned()))
            .with_base_url(provider.base_url.clone())
            .with_connect_timeout(Duration::from_secs(provider.connect_timeout_secs.into()))
            .with_request_timeout(Duration::from_secs(provider.request_timeout_secs.into())),
    )
    .map_err(|e| UnfoldError::Other(e.to_string()))?;

    let mut settings = TutorSettings::default()
        .with_model(config.tutor.model.clone())
        .with_temperature(config.tutor.temperature)
        .with_max_output_tokens(config.tutor.max_output_tokens);
    if let Some(instructions) = unfold_config::load_instructions(&config.tutor)? {
        settings = settings.with_instructions(instructions);
    }
    if let Some(ref model) = args.model {
        settings = settings.with_model(model.clone());
    }

    Ok(TutorSession::new(Arc::new(client), settings))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = unfold_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "unfold=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("Unfold Tutor v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            UnfoldConfig::default()
        }
    };

    let session = match build_session(&config, &args) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to start tutor: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        session = %session.id(),
        model = %session.settings().model,
        "Tutor session ready"
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut host = host::Host::new(session, std::io::stdout());
    if let Err(e) = host.run(stdin, !args.no_greeting).await {
        tracing::error!("Host error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!(turns = host.session().turn_count(), "Shutdown complete");
    ExitCode::SUCCESS
}
