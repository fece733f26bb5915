use axum::{extract::State, Json};
use axum_extra::extract::Query;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::dto::TagListQuery;
use crate::errors::ApiError;
use crate::models::Tag;
use crate::repo;

/// Handler for listing tags
///
/// This function handles GET requests to `/tags`. The optional `kind`
/// parameter restricts the listing to project or item tags.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `query` - Optional `kind` parameter
///
/// ### Returns
///
/// A list of tags ordered by name as JSON
#[instrument(skip(pool))]
pub async fn list_tags_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the optional kind from the query string
    Query(query): Query<TagListQuery>,
) -> Result<Json<Vec<Tag>>, ApiError> {
    debug!("Listing tags");

    // Call the repository function to list tags
    let listed = repo::list_tags(&pool, query.kind).map_err(ApiError::Database)?;

    info!("Retrieved {} tags", listed.len());

    // Return the list of tags as JSON
    Ok(Json(listed))
}
