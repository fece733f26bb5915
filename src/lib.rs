/// Showroom: a furniture project catalog service
///
/// This library provides the backend for a public catalog of interior
/// projects built around procured furniture: the projects themselves,
/// the items placed in them, the brands behind the items, the tags
/// used for discovery, and the photo galleries connecting all of them.
/// Visitors browse and filter the catalog and leave inquiries; staff
/// are notified of new inquiries by mail.
///
/// ### Modules
///
/// - `db`: Database connection management
/// - `models`: Data structures for catalog entities and junctions
/// - `views`: Assembled result shapes returned by the API
/// - `filter`: The shared catalog filter (state, URL codec, matching)
/// - `repo`: Repository layer for database operations
/// - `handlers`: Web API handlers
/// - `notify`: Staff mail notifications
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// The library exposes a RESTful API using Axum with the following endpoints:
///
/// - `GET /projects`: List visible projects, filterable via query parameters
/// - `GET /projects/{slug}`: Get a project page by slug
/// - `GET /projects/{slug}/photos`: List a project's gallery photos
/// - `GET /brands`: List brands with visible project counts
/// - `GET /brands/{slug}`: Get a brand catalog by slug
/// - `GET /items`: List items, filterable via query parameters
/// - `GET /items/{slug}`: Get an item page by slug
/// - `GET /items/{slug}/photos`: List the photos an item appears in
/// - `GET /photos`: The photo wall (newest photos across the catalog)
/// - `GET /photos/{id}`: Get a photo with its project and items
/// - `GET /tags`: List tags, optionally by kind
/// - `POST /inquiries`: Submit a visitor inquiry
/// - `GET /health`: Liveness check

/// Database connection module
pub mod db;

/// Data models module
pub mod models;

/// Assembled API result shapes
pub mod views;

/// Catalog filter state, URL codec and matching
pub mod filter;

/// Repository module for database operations
pub mod repo;

/// Web API handlers
pub mod handlers;

/// Staff mail notifications
pub mod notify;

/// API error types
pub mod errors;

/// Request and response payload types
pub mod dto;

/// Configuration handling
pub mod config;

/// Database schema module
pub mod schema;

/// Shared test helpers
#[cfg(test)]
pub mod test_utils;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state handed to every handler
///
/// Cloning is cheap: the pool is behind an `Arc` and the notifier
/// clones its HTTP client handle.
#[derive(Clone)]
pub struct AppState {
    pool: Arc<db::DbPool>,
    notifier: notify::Notifier,
}

impl AppState {
    /// Bundles the connection pool and notifier into the app state
    pub fn new(pool: Arc<db::DbPool>, notifier: notify::Notifier) -> Self {
        Self { pool, notifier }
    }
}

impl FromRef<AppState> for Arc<db::DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for notify::Notifier {
    fn from_ref(state: &AppState) -> Self {
        state.notifier.clone()
    }
}

/// Creates the application router with all routes
///
/// This function sets up the Axum router with all the API endpoints.
///
/// ### Arguments
///
/// * `state` - The application state shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes, a permissive CORS layer
/// for the public frontend, and the given state
pub fn create_app(state: AppState) -> Router {
    // The catalog is public and read-mostly; browsers may call it from
    // anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Route for listing projects with filter parameters
        .route("/projects", get(handlers::list_projects_handler))
        // Route for getting a project page by slug
        .route("/projects/{slug}", get(handlers::get_project_handler))
        // Route for a project's gallery photos
        .route("/projects/{slug}/photos", get(handlers::list_project_photos_handler))
        // Route for listing brands with project counts
        .route("/brands", get(handlers::list_brands_handler))
        // Route for getting a brand catalog by slug
        .route("/brands/{slug}", get(handlers::get_brand_handler))
        // Route for listing items with filter parameters
        .route("/items", get(handlers::list_items_handler))
        // Route for getting an item page by slug
        .route("/items/{slug}", get(handlers::get_item_handler))
        // Route for the photos an item appears in
        .route("/items/{slug}/photos", get(handlers::list_item_photos_handler))
        // Route for the photo wall
        .route("/photos", get(handlers::list_photos_handler))
        // Route for a photo detail page
        .route("/photos/{id}", get(handlers::get_photo_handler))
        // Route for listing tags
        .route("/tags", get(handlers::list_tags_handler))
        // Route for submitting an inquiry
        .route("/inquiries", post(handlers::create_inquiry_handler))
        // Route for the health check
        .route("/health", get(handlers::health_handler))
        // Allow cross-origin browser calls
        .layer(cors)
        // Add the application state to all handlers
        .with_state(state)
}

/// Runs the embedded migrations
///
/// This function applies all database migrations to set up the schema.
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
///
/// ### Panics
///
/// This function will panic if the migrations fail to run
pub fn run_migrations(conn: &mut diesel::SqliteConnection) {
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    // Define the embedded migrations
    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    // Run all pending migrations
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
}
