use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Links an item as used in a project
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::project_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectItem {
    /// The ID of the project
    project_id: String,

    /// The ID of the item
    item_id: String,

    /// When this link was created
    created_at: NaiveDateTime,
}

impl ProjectItem {
    /// Creates a new project item link
    pub fn new(project_id: String, item_id: String) -> Self {
        Self {
            project_id,
            item_id,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the project ID
    pub fn get_project_id(&self) -> String {
        self.project_id.clone()
    }

    /// Gets the item ID
    pub fn get_item_id(&self) -> String {
        self.item_id.clone()
    }

    /// Gets the creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
