//! The shared remote-call step: send a prompt under a schema, parse the JSON
//! text that comes back, and confirm it has the declared shape.

use super::providers::{GenerationRequest, InlinePart, ProviderError, TextProvider};
use crate::config::ModelConfig;
use crate::schema::{
    Schema, SchemaViolation, EVALUATION_SCHEMA, MCQ_SCHEMA, OUTPUT_SCHEMA, SUMMARY_SCHEMA,
};
use serde_json::Value;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Model returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Model output does not match schema: {0}")]
    SchemaMismatch(#[from] SchemaViolation),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Model and schema used by one endpoint.
#[derive(Debug, Clone)]
pub struct EndpointProfile {
    pub model: String,
    pub schema: &'static Schema,
}

/// Per-endpoint generation settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct EndpointProfiles {
    pub output: EndpointProfile,
    pub mcq: EndpointProfile,
    pub summary: EndpointProfile,
    pub evaluation: EndpointProfile,
}

impl EndpointProfiles {
    pub fn from_config(models: &ModelConfig) -> Self {
        let text = |schema| EndpointProfile {
            model: models.text_model.clone(),
            schema,
        };
        let reasoning = |schema| EndpointProfile {
            model: models.reasoning_model.clone(),
            schema,
        };

        Self {
            output: text(&OUTPUT_SCHEMA),
            mcq: reasoning(&MCQ_SCHEMA),
            summary: text(&SUMMARY_SCHEMA),
            evaluation: reasoning(&EVALUATION_SCHEMA),
        }
    }
}

/// Run one structured generation and return the parsed payload unchanged.
pub async fn generate_json(
    provider: &dyn TextProvider,
    profile: &EndpointProfile,
    prompt: &str,
    parts: &[InlinePart],
) -> Result<Value, GenerationError> {
    tracing::info!(model = %profile.model, prompt = %prompt, "Prompt");

    let response = provider
        .generate(GenerationRequest {
            model: &profile.model,
            prompt,
            parts,
            schema: profile.schema,
        })
        .await?;

    let text = response.text.ok_or(GenerationError::EmptyResponse)?;

    tracing::info!(
        model = %profile.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        content = %text,
        "Generated content"
    );

    let value: Value = serde_json::from_str(&text)?;
    profile.schema.check(&value)?;

    Ok(value)
}
