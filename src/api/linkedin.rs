use axum::{extract::State, Json};

use super::AppState;
use crate::error::{ApiError, Result};
use crate::models::{PostRequest, PostResult};

pub async fn post_to_linkedin(
    State(state): State<AppState>,
    Json(payload): Json<PostRequest>,
) -> Result<Json<PostResult>> {
    let title = payload.title.as_deref().unwrap_or("");
    let content = payload.content.as_deref().unwrap_or("");

    if title.is_empty() || content.is_empty() {
        return Err(ApiError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let result = state.publisher.publish(title, content).await?;
    Ok(Json(result))
}
