/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains functions for reading the catalog (projects, items,
/// brands, tags, photos) in their denormalized per-operation shapes,
/// plus the single write operation: storing a visitor inquiry.
///
/// The repository pattern abstracts away the details of database access
/// and provides a clean API for the rest of the application to use.

mod project_repo;
mod brand_repo;
mod item_repo;
mod photo_repo;
mod tag_repo;
mod inquiry_repo;

// Re-export all repository functions
pub use project_repo::*;
pub use brand_repo::*;
pub use item_repo::*;
pub use photo_repo::*;
pub use tag_repo::*;
pub use inquiry_repo::*;
