use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::db::DbPool;
use crate::dto::{CreateInquiryDto, InquiryReceipt};
use crate::errors::ApiError;
use crate::notify::Notifier;
use crate::repo;

/// Handler for submitting an inquiry
///
/// This function handles POST requests to `/inquiries`. The payload is
/// validated, the inquiry stored with status "pending", and the staff
/// notification dispatched on a detached task. By the time the
/// notification runs the response is already decided, so a failing
/// mail provider can never turn a stored inquiry into an error.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `notifier` - The mail notifier from the application state
/// * `payload` - The inquiry submission
///
/// ### Returns
///
/// A success receipt as JSON
#[instrument(skip(pool, notifier, payload))]
pub async fn create_inquiry_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the notifier from the application state
    State(notifier): State<Notifier>,
    // Extract and deserialize the JSON request body
    Json(payload): Json<CreateInquiryDto>,
) -> Result<Json<InquiryReceipt>, ApiError> {
    info!("Receiving new inquiry");

    // Reject incomplete submissions before touching the database
    payload.validate()?;

    // Call the repository function to store the inquiry
    let inquiry = repo::create_inquiry(&pool, &payload).map_err(ApiError::Storage)?;

    info!("Successfully stored inquiry with id: {}", inquiry.get_id());

    // Fire the staff notification without waiting for it
    notifier.notify_detached(inquiry);

    // Return the success receipt as JSON
    Ok(Json(InquiryReceipt { success: true }))
}
