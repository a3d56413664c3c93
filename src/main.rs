//! Interactive drafting session over stdin/stdout.
//!
//! Usage: `ledger-copilot [tenant] [user]`. Each input line is one user
//! message; each output line is the resulting draft as JSON. Logs go to
//! stderr.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use ledger_copilot::adapters::{
    AnthropicConfig, AnthropicProvider, InMemoryPendingStore, YamlTenantDirectory,
};
use ledger_copilot::application::DraftOrchestrator;
use ledger_copilot::config::AppConfig;
use ledger_copilot::domain::foundation::{SessionContext, TenantId, UserId};

fn session_from_args() -> Result<SessionContext, String> {
    let mut args = std::env::args().skip(1);
    let tenant = args.next().unwrap_or_else(|| "demo".to_string());
    let user = args.next().unwrap_or_else(|| "cli".to_string());

    let tenant = TenantId::new(tenant).map_err(|e| e.to_string())?;
    let user = UserId::new(user).map_err(|e| e.to_string())?;
    Ok(SessionContext::new(tenant, user))
}

fn build_orchestrator(config: &AppConfig) -> DraftOrchestrator {
    let mut orchestrator = DraftOrchestrator::new(Arc::new(InMemoryPendingStore::new()))
        .with_settings(config.orchestrator_settings());

    if let Some(path) = &config.drafting.directory_path {
        tracing::info!(path = %path.display(), "Using YAML tenant directory");
        orchestrator = orchestrator.with_directory(Arc::new(YamlTenantDirectory::new(path)));
    }

    if config.ai.is_active() {
        let key = config.ai.anthropic_api_key.clone().unwrap_or_default();
        let provider_config = AnthropicConfig::new(key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries);

        match AnthropicProvider::new(provider_config) {
            Ok(provider) => {
                tracing::info!(model = %config.ai.model, "Model-assisted classification enabled");
                orchestrator = orchestrator.with_ai_provider(Arc::new(provider));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Model provider unavailable; using rules only");
            }
        }
    }

    orchestrator
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {}", err);
        return ExitCode::FAILURE;
    }
    config.logging.init();

    let context = match session_from_args() {
        Ok(context) => context,
        Err(err) => {
            eprintln!("invalid session: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let orchestrator = build_orchestrator(&config);
    tracing::info!(session = %context.session_key(), "Drafting session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read input");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let draft = orchestrator.resolve(&line, &context).await;
        let rendered = match serde_json::to_string(&draft) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize draft");
                continue;
            }
        };

        if stdout.write_all(rendered.as_bytes()).await.is_err()
            || stdout.write_all(b"\n").await.is_err()
            || stdout.flush().await.is_err()
        {
            break;
        }
    }

    ExitCode::SUCCESS
}
