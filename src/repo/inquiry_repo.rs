use anyhow::{Context, Result};
use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::dto::CreateInquiryDto;
use crate::models::Inquiry;
use crate::schema::inquiries;

/// Stores a new visitor inquiry
///
/// The payload is expected to be validated already; handlers reject
/// incomplete submissions before reaching this point. The row is
/// stored with status "pending" so staff can track what still needs a
/// reply.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `dto` - The validated inquiry payload
///
/// ### Returns
///
/// The stored inquiry
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
#[instrument(skip(pool, dto))]
pub fn create_inquiry(pool: &DbPool, dto: &CreateInquiryDto) -> Result<Inquiry> {
    debug!("Storing new inquiry");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let new_inquiry = Inquiry::new(
        dto.name.clone().unwrap_or_default(),
        dto.email.clone().unwrap_or_default(),
        dto.phone.clone(),
        dto.company.clone(),
        dto.project_slug.clone(),
        dto.message.clone().unwrap_or_default(),
    );

    debug!("Inserting inquiry into database with id: {}", new_inquiry.get_id());

    diesel::insert_into(inquiries::table)
        .values(new_inquiry.clone())
        .execute(conn)
        .context("Failed to store inquiry")?;

    info!("Successfully stored inquiry with id: {}", new_inquiry.get_id());

    Ok(new_inquiry)
}
