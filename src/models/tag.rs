use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which entity type a tag applies to
///
/// Project pages and project filters only use `project` tags; item pages
/// only use `item` tags. The kind must be checked before a tag is shown
/// or matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Project,
    Item,
}

impl TagKind {
    /// Returns the database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            TagKind::Project => "project",
            TagKind::Item => "item",
        }
    }

    /// Parses a kind from a database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "project" => Some(TagKind::Project),
            "item" => Some(TagKind::Item),
            _ => None,
        }
    }
}

/// Represents a tag in the catalog
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Tag {
    /// Unique identifier for the tag (UUID v4 as string)
    id: String,

    /// The name of the tag
    name: String,

    /// Which entity type the tag applies to (`project` or `item`)
    kind: String,

    /// When this tag was created
    created_at: NaiveDateTime,
}

impl Tag {
    /// Creates a new tag
    ///
    /// ### Arguments
    ///
    /// * `name` - The name of the tag
    /// * `kind` - Which entity type the tag applies to
    ///
    /// ### Returns
    ///
    /// A new `Tag` instance with the specified name and kind
    pub fn new(name: String, kind: TagKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            kind: kind.as_db_str().to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the tag's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the tag's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the parsed kind
    ///
    /// ### Returns
    ///
    /// `None` when the stored value is not a recognized kind
    pub fn get_kind(&self) -> Option<TagKind> {
        TagKind::from_db_str(&self.kind)
    }

    /// Whether this tag applies to the given entity kind
    pub fn has_kind(&self, kind: TagKind) -> bool {
        self.get_kind() == Some(kind)
    }

    /// Gets the tag's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
