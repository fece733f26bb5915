use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::Query;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::filter::FilterQuery;
use crate::repo;
use crate::views::{ItemPage, ItemPhoto, ItemWithRelations};

/// Handler for listing items
///
/// This function handles GET requests to `/items`. The text, category,
/// tag, and brand dimensions apply; the item listing parses them from
/// the query string and narrows in memory. `years` describes project
/// completion and is ignored here.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `query` - The filter parameters from the URL
///
/// ### Returns
///
/// The items matching the filter as JSON, ordered by name
#[instrument(skip(pool, query))]
pub async fn list_items_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the filter dimensions from the query string
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<ItemWithRelations>>, ApiError> {
    debug!("Listing items");

    let mut filter = query.into_state();
    // Years are a project attribute; items carry none
    filter.years.clear();

    // Call the repository function to list all items
    let mut listed = repo::list_items(&pool).map_err(ApiError::Database)?;

    if !filter.is_empty() {
        listed.retain(|candidate| filter.matches(candidate));
    }

    info!("Retrieved {} items", listed.len());

    // Return the list of items as JSON
    Ok(Json(listed))
}

/// Handler for retrieving an item detail page
///
/// This function handles GET requests to `/items/{slug}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The item slug extracted from the URL path
///
/// ### Returns
///
/// The assembled item page as JSON, or null if no item has this slug
#[instrument(skip(pool), fields(slug = %slug))]
pub async fn get_item_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the item slug from the URL path
    Path(slug): Path<String>,
) -> Result<Json<Option<ItemPage>>, ApiError> {
    debug!("Retrieving item");

    // Call the repository function to get the item page
    let page = repo::get_item_by_slug(&pool, &slug).map_err(ApiError::Database)?;

    // Return the page (or None) as JSON
    Ok(Json(page))
}

/// Handler for listing the photos an item appears in
///
/// This function handles GET requests to `/items/{slug}/photos`. An
/// unknown slug yields an empty list rather than an error.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The item slug extracted from the URL path
///
/// ### Returns
///
/// The photos featuring the item, each with its project, as JSON
#[instrument(skip(pool), fields(slug = %slug))]
pub async fn list_item_photos_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the item slug from the URL path
    Path(slug): Path<String>,
) -> Result<Json<Vec<ItemPhoto>>, ApiError> {
    debug!("Listing item photos");

    // Resolve the slug first; the junction stores item ids
    let page = repo::get_item_by_slug(&pool, &slug).map_err(ApiError::Database)?;

    let Some(page) = page else {
        debug!("No item with this slug, returning empty photo list");
        return Ok(Json(Vec::new()));
    };

    let listed = repo::list_photos_for_item(&pool, &page.item.get_id());

    info!("Retrieved {} photos for item {}", listed.len(), slug);

    Ok(Json(listed))
}
