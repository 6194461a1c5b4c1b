//! Query-string parameters for the generation endpoints.
//!
//! Every field is an untyped string. An absent or empty value counts as
//! missing.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct OutputParams {
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct McqParams {
    pub text: Option<String>,
    pub number_of_questions: Option<String>,
    pub level: Option<String>,
    /// Filesystem path of an image to send alongside the text.
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub text: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluationParams {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub max_marks: Option<String>,
}

/// The parameter's value when it is present and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
