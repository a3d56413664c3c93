//! DraftOrchestrator - One conversational turn of transaction drafting.
//!
//! Per message: resume a parked draft if one exists (or cancel it), answer
//! greetings, classify (model when configured, rules otherwise or on any
//! model failure), then validate and either finalize or park behind a
//! question. No error escapes `resolve`; every failure degrades to a
//! conversational reply or the rule-based path.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::drafting::{
    assess, is_greeting, merge_answer, normalize, parse_model_output, system_prompt, Assessment,
    Classification, Draft, DraftData, Intent, IntentClassifier, ModelCandidate, ModelOutputError,
    RuleBasedIntentClassifier, TenantHints, CHAT_PROMPT, DEFAULT_MAX_INPUT_CHARS, HELP_MESSAGE,
};
use crate::domain::foundation::{SessionContext, SessionKey};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, PendingDraftStore, RequestMetadata,
    TenantDirectory,
};

/// Confidence attached to rule-based candidates and resumed drafts.
pub const RULE_CONFIDENCE: f32 = 0.9;
/// Confidence for a recognized intent that still needs a restatement.
pub const INCOMPLETE_CONFIDENCE: f32 = 0.6;
/// Confidence for conversational replies.
pub const CHAT_CONFIDENCE: f32 = 0.3;

const CANCEL_PHRASES: &[&str] = &[
    "cancel",
    "cancel it",
    "cancel that",
    "cancel this",
    "cancel transaction",
    "cancel the transaction",
    "cancel draft",
    "cancel po",
    "cancel order",
    "cancel invoice",
    "cancel bill",
    "never mind",
    "nevermind",
    "forget it",
    "stop",
    "abort",
];

const CANCELLED_MESSAGE: &str =
    "Okay, I've cancelled that draft. Tell me what you'd like to record next.";

/// Whether the message abandons the pending draft.
pub fn is_cancellation(text: &str) -> bool {
    let trimmed = text.trim().trim_end_matches(|c| c == '.' || c == '!').trim();
    CANCEL_PHRASES.contains(&trimmed)
}

/// Tunables for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorSettings {
    /// Longer input is truncated before any matching.
    pub max_input_chars: usize,
    /// Per-category cap on tenant names used in prompts and questions.
    pub hint_limit: usize,
    /// Token budget for the model reply.
    pub max_tokens: u32,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            hint_limit: 20,
            max_tokens: 1024,
        }
    }
}

/// Why the model path did not produce a candidate.
#[derive(Debug, thiserror::Error)]
enum ModelPathError {
    #[error(transparent)]
    Provider(#[from] AIError),
    #[error(transparent)]
    Output(#[from] ModelOutputError),
}

/// Entry point for drafting turns
pub struct DraftOrchestrator {
    store: Arc<dyn PendingDraftStore>,
    classifier: Arc<dyn IntentClassifier>,
    directory: Option<Arc<dyn TenantDirectory>>,
    ai_provider: Option<Arc<dyn AIProvider>>,
    settings: OrchestratorSettings,
}

impl DraftOrchestrator {
    /// Rule-based orchestrator with no directory and no model.
    pub fn new(store: Arc<dyn PendingDraftStore>) -> Self {
        Self {
            store,
            classifier: Arc::new(RuleBasedIntentClassifier),
            directory: None,
            ai_provider: None,
            settings: OrchestratorSettings::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_directory(mut self, directory: Arc<dyn TenantDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_ai_provider(mut self, provider: Arc<dyn AIProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    pub fn with_settings(mut self, settings: OrchestratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Processes one user message for a session and returns the resulting draft.
    pub async fn resolve(&self, message: &str, context: &SessionContext) -> Draft {
        let text = normalize(message, self.settings.max_input_chars);
        let key = context.session_key();

        if let Some(draft) = self.resume_pending(&text, &key, context).await {
            return draft;
        }

        if text.is_empty() {
            return Draft::chat(CHAT_PROMPT).with_confidence(CHAT_CONFIDENCE);
        }
        if is_greeting(&text) {
            return Draft::chat(HELP_MESSAGE).with_confidence(CHAT_CONFIDENCE);
        }

        let hints = self.hints(context).await;
        let (classification, model_confidence) = self.classify(&text, &key, &hints).await;

        match classification {
            Classification::Chat { message } => {
                Draft::chat(message).with_confidence(CHAT_CONFIDENCE)
            }
            Classification::Incomplete {
                intent,
                data,
                message,
            } => Draft::incomplete(intent, data, message).with_confidence(INCOMPLETE_CONFIDENCE),
            Classification::Candidate { intent, data } => {
                let confidence = model_confidence.unwrap_or(RULE_CONFIDENCE);
                self.settle(&key, intent, data, &hints)
                    .await
                    .with_confidence(confidence)
            }
        }
    }

    /// Consumes the parked draft, if any. `None` means classify afresh.
    async fn resume_pending(
        &self,
        text: &str,
        key: &SessionKey,
        context: &SessionContext,
    ) -> Option<Draft> {
        let pending = match self.store.get(key).await {
            Ok(Some(pending)) => pending,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(
                    tenant = key.tenant(),
                    user = key.user(),
                    error = %err,
                    "Pending draft lookup failed; treating as none"
                );
                return None;
            }
        };

        // Read-once: the entry never survives the turn that reads it.
        if let Err(err) = self.store.delete(key).await {
            tracing::warn!(tenant = key.tenant(), user = key.user(), error = %err, "Failed to delete pending draft");
        }

        if is_cancellation(text) {
            tracing::info!(
                tenant = key.tenant(),
                user = key.user(),
                intent = %pending.intent,
                status = %pending.status,
                "Pending draft cancelled"
            );
            return Some(Draft::chat(CANCELLED_MESSAGE).with_confidence(CHAT_CONFIDENCE));
        }

        let status = pending.status;
        match merge_answer(pending, text) {
            Ok((intent, data)) => {
                tracing::debug!(
                    tenant = key.tenant(),
                    user = key.user(),
                    intent = %intent,
                    status = %status,
                    "Merged answer into pending draft"
                );
                let hints = self.hints(context).await;
                Some(
                    self.settle(key, intent, data, &hints)
                        .await
                        .with_confidence(RULE_CONFIDENCE),
                )
            }
            Err(err) => {
                tracing::warn!(
                    tenant = key.tenant(),
                    user = key.user(),
                    error = %err,
                    "Discarded pending draft; classifying message afresh"
                );
                None
            }
        }
    }

    /// Validates a candidate and parks it when a question was asked.
    async fn settle(
        &self,
        key: &SessionKey,
        intent: Intent,
        data: DraftData,
        hints: &TenantHints,
    ) -> Draft {
        match assess(intent, data, hints) {
            Assessment::Ready(draft) => {
                tracing::info!(tenant = key.tenant(), user = key.user(), intent = %intent, "Draft ready");
                draft
            }
            Assessment::Parked { draft, pending } => {
                tracing::info!(
                    tenant = key.tenant(),
                    user = key.user(),
                    intent = %intent,
                    status = %pending.status,
                    "Draft parked for clarification"
                );
                if let Err(err) = self.store.set(key, pending).await {
                    tracing::warn!(tenant = key.tenant(), user = key.user(), error = %err, "Failed to park draft");
                }
                draft
            }
            Assessment::Discarded(draft) => {
                tracing::info!(
                    tenant = key.tenant(),
                    user = key.user(),
                    intent = %intent,
                    missing = draft.missing.len(),
                    "Draft discarded; fields cannot be asked for"
                );
                draft
            }
        }
    }

    /// Model classification when configured, rules otherwise or on failure.
    async fn classify(
        &self,
        text: &str,
        key: &SessionKey,
        hints: &TenantHints,
    ) -> (Classification, Option<f32>) {
        let Some(provider) = &self.ai_provider else {
            tracing::debug!(tenant = key.tenant(), "No model provider configured; using rules");
            return (self.classifier.classify(text), None);
        };

        match self.classify_with_model(provider.as_ref(), text, key, hints).await {
            Ok(candidate) => {
                tracing::debug!(tenant = key.tenant(), intent = %candidate.intent, "Model candidate accepted");
                let confidence = candidate.confidence;
                (candidate.into_classification(CHAT_PROMPT), confidence)
            }
            Err(err) => {
                tracing::warn!(
                    tenant = key.tenant(),
                    user = key.user(),
                    provider = %provider.provider_info().name,
                    error = %err,
                    "Model classification failed; falling back to rules"
                );
                (self.classifier.classify(text), None)
            }
        }
    }

    async fn classify_with_model(
        &self,
        provider: &dyn AIProvider,
        text: &str,
        key: &SessionKey,
        hints: &TenantHints,
    ) -> Result<ModelCandidate, ModelPathError> {
        let request = CompletionRequest::new(RequestMetadata::new(
            key.clone(),
            Uuid::new_v4().to_string(),
        ))
        .with_system_prompt(system_prompt(hints))
        .with_message(MessageRole::User, text)
        .with_max_tokens(self.settings.max_tokens)
        .with_temperature(0.0);

        let response = provider.complete(request).await?;
        Ok(parse_model_output(&response.content)?)
    }

    /// Tenant hints, or empty when lookups are disabled or fail.
    async fn hints(&self, context: &SessionContext) -> TenantHints {
        let (Some(directory), Some(tenant)) = (&self.directory, &context.tenant_id) else {
            return TenantHints::empty();
        };
        if !context.directory_enabled() {
            return TenantHints::empty();
        }

        match directory.hints(tenant).await {
            Ok(hints) => hints.truncated(self.settings.hint_limit),
            Err(err) => {
                tracing::warn!(tenant = tenant.as_str(), error = %err, "Tenant directory lookup failed; using empty hints");
                TenantHints::empty()
            }
        }
    }
}
