use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a project
///
/// Stored as a nullable text column; rows with a NULL status predate the
/// column and count as published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Published,
    Hidden,
}

impl ProjectStatus {
    /// Returns the database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Hidden => "hidden",
        }
    }

    /// Parses a status from a database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(ProjectStatus::Draft),
            "published" => Some(ProjectStatus::Published),
            "hidden" => Some(ProjectStatus::Hidden),
            _ => None,
        }
    }
}

/// Represents an installation project in the catalog
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Project {
    /// Unique identifier for the project (UUID v4 as string)
    id: String,

    /// URL-addressable identifier, unique across projects
    slug: String,

    /// The display title of the project
    title: String,

    /// Longer description shown on the detail page
    description: Option<String>,

    /// Explicit cover image; when absent the first gallery photo stands in
    cover_image_url: Option<String>,

    /// Completion year
    year: Option<i32>,

    /// Floor area in square meters
    area: Option<f64>,

    /// Free-form location label
    location: Option<String>,

    /// Publication status; NULL counts as published
    status: Option<String>,

    /// When this project was created
    created_at: NaiveDateTime,

    /// When this project was last updated
    updated_at: NaiveDateTime,
}

impl Project {
    /// Creates a new project
    ///
    /// ### Arguments
    ///
    /// * `slug` - The URL-addressable identifier
    /// * `title` - The display title
    ///
    /// ### Returns
    ///
    /// A new `Project` with a generated ID, no optional fields set, and a
    /// NULL (visible) status
    pub fn new(slug: String, title: String) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            title,
            description: None,
            cover_image_url: None,
            year: None,
            area: None,
            location: None,
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the project's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the project's slug
    pub fn get_slug(&self) -> String {
        self.slug.clone()
    }

    /// Gets the project's title
    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    /// Gets the project's description
    pub fn get_description(&self) -> Option<String> {
        self.description.clone()
    }

    /// Sets the project's description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the explicitly set cover image URL
    ///
    /// This is only the stored column; the display cover with its gallery
    /// fallback lives on the view types.
    pub fn get_cover_image_url(&self) -> Option<String> {
        self.cover_image_url.clone()
    }

    /// Sets the explicit cover image URL
    pub fn set_cover_image_url(&mut self, cover_image_url: Option<String>) {
        self.cover_image_url = cover_image_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the completion year
    pub fn get_year(&self) -> Option<i32> {
        self.year
    }

    /// Sets the completion year
    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the floor area in square meters
    pub fn get_area(&self) -> Option<f64> {
        self.area
    }

    /// Sets the floor area in square meters
    pub fn set_area(&mut self, area: Option<f64>) {
        self.area = area;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the location label
    pub fn get_location(&self) -> Option<String> {
        self.location.clone()
    }

    /// Sets the location label
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the parsed publication status
    ///
    /// ### Returns
    ///
    /// `None` when the column is NULL or holds an unknown value
    pub fn get_status(&self) -> Option<ProjectStatus> {
        self.status.as_deref().and_then(ProjectStatus::from_db_str)
    }

    /// Sets the publication status
    pub fn set_status(&mut self, status: Option<ProjectStatus>) {
        self.status = status.map(|s| s.as_db_str().to_string());
        self.updated_at = Utc::now().naive_utc();
    }

    /// Whether the project may appear on public surfaces
    ///
    /// ### Returns
    ///
    /// `true` for a `published` or NULL status, `false` for `draft`,
    /// `hidden`, or any unrecognized value
    pub fn is_visible(&self) -> bool {
        match self.status.as_deref() {
            None => true,
            Some(s) => ProjectStatus::from_db_str(s) == Some(ProjectStatus::Published),
        }
    }

    /// Gets the creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    /// Gets the last-update timestamp as a DateTime<Utc>
    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}
