/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler is responsible for processing a specific type of HTTP request,
/// extracting the necessary data, calling the appropriate repository functions,
/// and returning a properly formatted response.

mod project_handlers;
mod brand_handlers;
mod item_handlers;
mod photo_handlers;
mod tag_handlers;
mod inquiry_handlers;

// Re-export all handlers
pub use project_handlers::*;
pub use brand_handlers::*;
pub use item_handlers::*;
pub use photo_handlers::*;
pub use tag_handlers::*;
pub use inquiry_handlers::*;

/// Handler for the health check
///
/// This function handles GET requests to `/health`.
pub async fn health_handler() -> &'static str {
    "OK"
}
