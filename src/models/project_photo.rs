use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a photo into a project's gallery
///
/// `sort_order` drives gallery ordering and the cover fallback: when a
/// project has no explicit cover image, the photo with the lowest order
/// stands in. A NULL order sorts after every explicit one.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::project_photos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectPhoto {
    /// The ID of the project
    project_id: String,

    /// The ID of the photo
    photo_id: String,

    /// Position within the gallery; NULL sorts last
    sort_order: Option<i32>,

    /// When this link was created
    created_at: NaiveDateTime,
}

impl ProjectPhoto {
    /// Creates a new project photo link
    ///
    /// ### Arguments
    ///
    /// * `project_id` - The ID of the project
    /// * `photo_id` - The ID of the photo
    /// * `sort_order` - Position within the gallery, if any
    ///
    /// ### Returns
    ///
    /// A new `ProjectPhoto` linking the photo into the project's gallery
    pub fn new(project_id: String, photo_id: String, sort_order: Option<i32>) -> Self {
        Self {
            project_id,
            photo_id,
            sort_order,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the project ID
    pub fn get_project_id(&self) -> String {
        self.project_id.clone()
    }

    /// Gets the photo ID
    pub fn get_photo_id(&self) -> String {
        self.photo_id.clone()
    }

    /// Gets the position within the gallery
    pub fn get_sort_order(&self) -> Option<i32> {
        self.sort_order
    }

    /// Gets the creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
