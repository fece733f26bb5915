use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an installation photo
///
/// Photos are shared entities: one photo can belong to a project gallery
/// and appear on several item pages at the same time.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::photos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Photo {
    /// Unique identifier for the photo (UUID v4 as string)
    id: String,

    /// The image URL
    image_url: String,

    /// Alternative text for accessibility
    alt_text: Option<String>,

    /// Optional display caption
    title: Option<String>,

    /// When this photo was created
    created_at: NaiveDateTime,
}

impl Photo {
    /// Creates a new photo with the given image URL
    pub fn new(image_url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_url,
            alt_text: None,
            title: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the photo's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the image URL
    pub fn get_image_url(&self) -> String {
        self.image_url.clone()
    }

    /// Gets the alternative text
    pub fn get_alt_text(&self) -> Option<String> {
        self.alt_text.clone()
    }

    /// Sets the alternative text
    pub fn set_alt_text(&mut self, alt_text: Option<String>) {
        self.alt_text = alt_text;
    }

    /// Gets the display caption
    pub fn get_title(&self) -> Option<String> {
        self.title.clone()
    }

    /// Sets the display caption
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Gets the creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
