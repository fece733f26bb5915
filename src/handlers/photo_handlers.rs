use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::Query;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::dto::PhotoWallQuery;
use crate::errors::ApiError;
use crate::repo;
use crate::views::{PhotoPage, PhotoWithItems};

/// The number of photos a wall request returns when no limit is given
const DEFAULT_WALL_LIMIT: i64 = 60;

/// Handler for the photo wall
///
/// This function handles GET requests to `/photos`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `query` - Optional `limit` parameter capping the wall size
///
/// ### Returns
///
/// The most recent photos with their items as JSON
#[instrument(skip(pool))]
pub async fn list_photos_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the optional limit from the query string
    Query(query): Query<PhotoWallQuery>,
) -> Result<Json<Vec<PhotoWithItems>>, ApiError> {
    debug!("Listing photo wall");

    let limit = query.limit.unwrap_or(DEFAULT_WALL_LIMIT).max(0);

    // Call the repository function to list the newest photos
    let wall = repo::list_photos(&pool, limit).map_err(ApiError::Database)?;

    info!("Retrieved {} photos", wall.len());

    // Return the photo wall as JSON
    Ok(Json(wall))
}

/// Handler for retrieving a photo detail page
///
/// This function handles GET requests to `/photos/{id}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `id` - The photo id extracted from the URL path
///
/// ### Returns
///
/// The photo with its visible project and items as JSON, or null when
/// no such photo is visible
#[instrument(skip(pool), fields(id = %id))]
pub async fn get_photo_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the photo id from the URL path
    Path(id): Path<String>,
) -> Result<Json<Option<PhotoPage>>, ApiError> {
    debug!("Retrieving photo");

    // Call the repository function to get the photo page
    let page = repo::get_photo_by_id(&pool, &id).map_err(ApiError::Database)?;

    // Return the page (or None) as JSON
    Ok(Json(page))
}
