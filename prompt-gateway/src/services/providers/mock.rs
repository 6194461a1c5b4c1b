//! Mock provider implementation for testing.

use super::{
    FinishReason, GenerationRequest, InlinePart, ProviderError, ProviderResponse, TextProvider,
};
use crate::schema::Schema;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text as the generated payload.
    Text(String),
    /// Return a response without any text candidate.
    Empty,
    /// Fail with `ProviderError::ApiError` carrying this message.
    Fail(String),
}

/// A generation request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub prompt: String,
    pub parts: Vec<InlinePart>,
    pub schema: &'static Schema,
}

/// Mock text provider that replays a scripted reply and records every call.
pub struct MockTextProvider {
    enabled: bool,
    reply: MockReply,
    calls: Mutex<Vec<RecordedRequest>>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            reply: MockReply::Text(r#"{"output":"Mock response"}"#.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            ..Self::new(true)
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(message.into()))
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.lock_calls().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        self.lock_calls().push(RecordedRequest {
            model: request.model.to_string(),
            prompt: request.prompt.to_string(),
            parts: request.parts.to_vec(),
            schema: request.schema,
        });

        let text = match &self.reply {
            MockReply::Text(text) => Some(text.clone()),
            MockReply::Empty => None,
            MockReply::Fail(message) => return Err(ProviderError::ApiError(message.clone())),
        };

        Ok(ProviderResponse {
            input_tokens: request.prompt.len() as i32 / 4,
            output_tokens: text.as_ref().map_or(0, |t| t.len() as i32 / 4),
            text,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}
