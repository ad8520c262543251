//! Feedback submission handler.

use atrium_core::NewFeedback;
use axum::{extract::State, response::Response, Json};
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::{
    responses,
    validation::{self, FieldCheck},
};
use crate::server::AppState;

/// Incoming feedback body.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    name: Option<String>,
    role: Option<String>,
    company: Option<String>,
    rating: Option<i32>,
    message: Option<String>,
}

impl FeedbackRequest {
    /// Validates the body into an insertable submission.
    fn into_submission(self) -> Result<NewFeedback, Vec<String>> {
        let mut check = FieldCheck::new();

        let name = check.required("name", self.name, 120);
        let role = check.optional("role", self.role, 120);
        let company = check.optional("company", self.company, 160);
        let message = check.required("message", self.message, 4000);

        let rating = match self.rating {
            Some(rating) if (1..=5).contains(&rating) => Some(rating),
            Some(_) => {
                check.push("rating must be between 1 and 5");
                None
            },
            None => {
                check.push("rating is required");
                None
            },
        };

        check.finish()?;

        Ok(NewFeedback {
            name: name.unwrap_or_default(),
            role,
            company,
            rating: rating.unwrap_or_default(),
            message: message.unwrap_or_default(),
        })
    }
}

/// Handles `POST /api/feedback`.
///
/// Same contract as the contact handler: structured 400 on validation
/// failure, fixed 500 envelope on database failure.
#[instrument(name = "submit_feedback", skip(state, body))]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(body): Json<FeedbackRequest>,
) -> Response {
    let submission = match body.into_submission() {
        Ok(submission) => submission,
        Err(details) => return validation::validation_error(details),
    };

    match state.storage.feedback.insert(&submission).await {
        Ok(id) => {
            info!(id, "Feedback stored");
            responses::success()
        },
        Err(e) => {
            error!(error = %e, "Failed to store feedback");
            responses::database_error()
        },
    }
}
