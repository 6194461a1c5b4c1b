use crate::dtos::{present, EvaluationParams, McqParams, OutputParams, SummaryParams};
use crate::middleware::query::QueryParams;
use crate::prompts;
use crate::services::providers::InlinePart;
use crate::services::{generate_json, load_inline_image};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

async fn inline_image(path: Option<&str>) -> Result<Vec<InlinePart>, AppError> {
    match path {
        Some(path) => {
            let part = load_inline_image(path).await.map_err(|e| {
                AppError::InternalError(anyhow::anyhow!(
                    "Failed to read image '{}': {}",
                    path,
                    e
                ))
            })?;
            Ok(vec![part])
        }
        None => Ok(Vec::new()),
    }
}

pub async fn get_output(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<OutputParams>,
) -> Result<Json<Value>, AppError> {
    let prompt =
        present(&params.prompt).ok_or_else(|| AppError::bad_request("Prompt is required"))?;

    let value = generate_json(
        state.text_provider.as_ref(),
        &state.profiles.output,
        prompt,
        &[],
    )
    .await?;

    Ok(Json(value))
}

pub async fn generate_mcq(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<McqParams>,
) -> Result<Json<Value>, AppError> {
    let (text, number_of_questions, level) = match (
        present(&params.text),
        present(&params.number_of_questions),
        present(&params.level),
    ) {
        (Some(text), Some(n), Some(level)) => (text, n, level),
        _ => {
            return Err(AppError::bad_request(
                "Text, number_of_questions, and level are required",
            ))
        }
    };

    let prompt = prompts::mcq_prompt(text, number_of_questions, level);
    let parts = inline_image(present(&params.image)).await?;

    let value = generate_json(
        state.text_provider.as_ref(),
        &state.profiles.mcq,
        &prompt,
        &parts,
    )
    .await?;

    Ok(Json(value))
}

pub async fn summarize(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SummaryParams>,
) -> Result<Json<Value>, AppError> {
    let text = present(&params.text).ok_or_else(|| AppError::bad_request("Text is required"))?;

    let prompt = prompts::summary_prompt(text);
    let parts = inline_image(present(&params.image)).await?;

    let value = generate_json(
        state.text_provider.as_ref(),
        &state.profiles.summary,
        &prompt,
        &parts,
    )
    .await?;

    Ok(Json(value))
}

pub async fn evaluate_answer(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<EvaluationParams>,
) -> Result<Json<Value>, AppError> {
    let (question, answer, max_marks) = match (
        present(&params.question),
        present(&params.answer),
        present(&params.max_marks),
    ) {
        (Some(question), Some(answer), Some(max_marks)) => (question, answer, max_marks),
        _ => {
            return Err(AppError::bad_request(
                "Question, answer, and max_marks are required",
            ))
        }
    };

    if let Some(missing) = prompts::missing_answer_lines(answer, max_marks) {
        return Err(AppError::bad_request(prompts::answer_too_short_message(
            missing,
        )));
    }

    let prompt = prompts::evaluation_prompt(question, answer, max_marks);

    let value = generate_json(
        state.text_provider.as_ref(),
        &state.profiles.evaluation,
        &prompt,
        &[],
    )
    .await?;

    Ok(Json(value))
}
