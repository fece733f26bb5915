use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::repo;
use crate::views::{BrandCatalog, BrandWithCount};

/// Handler for listing brands
///
/// This function handles GET requests to `/brands`. Each brand carries
/// the number of visible projects featuring its items.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// A list of all brands with project counts as JSON
#[instrument(skip(pool))]
pub async fn list_brands_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<BrandWithCount>>, ApiError> {
    debug!("Listing brands");

    // Call the repository function to list brands with counts
    let listed = repo::list_brands_with_counts(&pool).map_err(ApiError::Database)?;

    info!("Retrieved {} brands", listed.len());

    // Return the list of brands as JSON
    Ok(Json(listed))
}

/// Handler for retrieving a brand's catalog page
///
/// This function handles GET requests to `/brands/{slug}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The brand slug extracted from the URL path
///
/// ### Returns
///
/// The brand with its items and related projects as JSON, or null if
/// no brand has this slug
#[instrument(skip(pool), fields(slug = %slug))]
pub async fn get_brand_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the brand slug from the URL path
    Path(slug): Path<String>,
) -> Result<Json<Option<BrandCatalog>>, ApiError> {
    debug!("Retrieving brand");

    // Call the repository function to get the brand catalog
    let catalog = repo::get_brand_by_slug(&pool, &slug).map_err(ApiError::Database)?;

    // Return the catalog (or None) as JSON
    Ok(Json(catalog))
}
