//! Contact-form submission handler.

use atrium_core::NewContactMessage;
use axum::{extract::State, response::Response, Json};
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::{
    responses,
    validation::{self, FieldCheck},
};
use crate::server::AppState;

/// Incoming contact-form body.
///
/// Every field is optional at the serde layer so missing values surface as a
/// structured 400 instead of an opaque extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    service: Option<String>,
    message: Option<String>,
}

impl ContactRequest {
    /// Validates the body into an insertable submission.
    fn into_submission(self) -> Result<NewContactMessage, Vec<String>> {
        let mut check = FieldCheck::new();

        let name = check.required("name", self.name, 120);
        let email = check.required("email", self.email, 254);
        let phone = check.optional("phone", self.phone, 32);
        let service = check.optional("service", self.service, 120);
        let message = check.required("message", self.message, 4000);

        if let Some(email) = &email {
            if !email.contains('@') {
                check.push("email must be a valid address");
            }
        }

        check.finish()?;

        Ok(NewContactMessage {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            service,
            message: message.unwrap_or_default(),
        })
    }
}

/// Handles `POST /api/contact`.
///
/// Validation failures return a structured 400 before any insert; a database
/// failure returns the fixed 500 envelope with the cause kept to the logs.
#[instrument(name = "submit_contact", skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Response {
    let submission = match body.into_submission() {
        Ok(submission) => submission,
        Err(details) => return validation::validation_error(details),
    };

    match state.storage.contact_messages.insert(&submission).await {
        Ok(id) => {
            info!(id, "Contact message stored");
            responses::success()
        },
        Err(e) => {
            error!(error = %e, "Failed to store contact message");
            responses::database_error()
        },
    }
}
