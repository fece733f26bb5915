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
use crate::views::{PhotoWithItems, ProjectPage, ProjectWithRelations};

/// Handler for listing projects
///
/// This function handles GET requests to `/projects`. The query string
/// carries the filter dimensions (`q`, `categories`, `tags`, `brands`,
/// `years`), each list comma-separated.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `query` - The filter parameters from the URL
///
/// ### Returns
///
/// The visible projects matching the filter as JSON
#[instrument(skip(pool, query))]
pub async fn list_projects_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the filter dimensions from the query string
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<ProjectWithRelations>>, ApiError> {
    debug!("Listing projects");

    let filter = query.into_state();

    // Call the repository function to list matching projects
    let listed = repo::list_projects(&pool, &filter).map_err(ApiError::Database)?;

    info!("Retrieved {} projects", listed.len());

    // Return the list of projects as JSON
    Ok(Json(listed))
}

/// Handler for retrieving a project detail page
///
/// This function handles GET requests to `/projects/{slug}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The project slug extracted from the URL path
///
/// ### Returns
///
/// The assembled project page as JSON, or null if no visible project
/// has this slug
#[instrument(skip(pool), fields(slug = %slug))]
pub async fn get_project_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the project slug from the URL path
    Path(slug): Path<String>,
) -> Result<Json<Option<ProjectPage>>, ApiError> {
    debug!("Retrieving project");

    // Call the repository function to get the project
    let project = repo::get_project_by_slug(&pool, &slug).map_err(ApiError::Database)?;

    // Assemble the page shape (cover fallback, kind-scoped tags, deduped items)
    Ok(Json(project.map(ProjectPage::from_relations)))
}

/// Handler for listing a project's gallery photos
///
/// This function handles GET requests to `/projects/{slug}/photos`.
/// An unknown slug yields an empty list rather than an error, matching
/// the degrade-to-empty contract of the photo queries.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The project slug extracted from the URL path
///
/// ### Returns
///
/// The gallery photos with their items as JSON
#[instrument(skip(pool), fields(slug = %slug))]
pub async fn list_project_photos_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    // Extract the project slug from the URL path
    Path(slug): Path<String>,
) -> Result<Json<Vec<PhotoWithItems>>, ApiError> {
    debug!("Listing project photos");

    // Resolve the slug first; the junction stores project ids
    let project = repo::get_project_by_slug(&pool, &slug).map_err(ApiError::Database)?;

    let Some(project) = project else {
        debug!("No visible project with this slug, returning empty gallery");
        return Ok(Json(Vec::new()));
    };

    let gallery = repo::list_photos_for_project(&pool, &project.project.get_id());

    info!("Retrieved {} photos for project {}", gallery.len(), slug);

    Ok(Json(gallery))
}
