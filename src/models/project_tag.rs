use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a tag to a project
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::project_tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectTag {
    /// The ID of the project
    project_id: String,

    /// The ID of the tag
    tag_id: String,

    /// When this link was created
    created_at: NaiveDateTime,
}

impl ProjectTag {
    /// Creates a new project tag link
    pub fn new(project_id: String, tag_id: String) -> Self {
        Self {
            project_id,
            tag_id,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the project ID
    pub fn get_project_id(&self) -> String {
        self.project_id.clone()
    }

    /// Gets the tag ID
    pub fn get_tag_id(&self) -> String {
        self.tag_id.clone()
    }

    /// Gets the creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
