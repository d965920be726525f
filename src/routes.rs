use std::{collections::BTreeMap, sync::Arc};

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{error::AppError, models::RedactedQuestion, sampler, state::AppState};

/// Today's selection with the correct-choice field stripped.
pub async fn quiz_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RedactedQuestion>>, AppError> {
    let pool = state.snapshot()?;
    if pool.is_empty() {
        return Err(AppError::QuizUnavailable);
    }

    let selection = sampler::select(&pool, Utc::now().date_naive(), state.config.daily_count);

    Ok(Json(sampler::redact(&selection)))
}

/// Correct-choice indices for today's selection, keyed by question id.
pub async fn answer_key_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<u32, usize>>, AppError> {
    let pool = state.snapshot()?;
    if pool.is_empty() {
        return Err(AppError::AnswerKeyUnavailable);
    }

    let selection = sampler::select(&pool, Utc::now().date_naive(), state.config.daily_count);

    Ok(Json(sampler::answer_key(&selection)))
}
