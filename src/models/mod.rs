/// Data models module
///
/// This module defines the core data structures used throughout the application.
/// It includes database models that map to database tables, as well as methods
/// for creating and manipulating these models.

// Re-export all model types
mod brand;
pub use brand::Brand;

mod project;
pub use project::{Project, ProjectStatus};

mod item;
pub use item::Item;

mod tag;
pub use tag::{Tag, TagKind};

mod photo;
pub use photo::Photo;

mod project_photo;
pub use project_photo::ProjectPhoto;

mod project_item;
pub use project_item::ProjectItem;

mod project_tag;
pub use project_tag::ProjectTag;

mod item_tag;
pub use item_tag::ItemTag;

mod photo_item;
pub use photo_item::PhotoItem;

mod inquiry;
pub use inquiry::Inquiry;
