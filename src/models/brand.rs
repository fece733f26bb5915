use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a furniture brand in the catalog
///
/// `QueryableByName` is derived as well because the brand listing keeps a
/// raw-SQL fallback path alongside the DSL query.
#[derive(
    Queryable,
    QueryableByName,
    Selectable,
    Insertable,
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Brand {
    /// Unique identifier for the brand (UUID v4 as string)
    id: String,

    /// URL-addressable identifier, unique across brands
    slug: String,

    /// Korean display name, the primary sort key
    name_ko: String,

    /// Latin display name
    name_en: Option<String>,

    /// Longer description shown on the brand page
    description: Option<String>,

    /// Logo image; the cover image stands in when absent
    logo_image_url: Option<String>,

    /// Cover image for the brand page header
    cover_image_url: Option<String>,

    /// External brand website
    website_url: Option<String>,

    /// When this brand was created
    created_at: NaiveDateTime,

    /// When this brand was last updated
    updated_at: NaiveDateTime,
}

impl Brand {
    /// Creates a new brand
    ///
    /// ### Arguments
    ///
    /// * `slug` - The URL-addressable identifier
    /// * `name_ko` - The Korean display name
    ///
    /// ### Returns
    ///
    /// A new `Brand` with a generated ID and no optional fields set
    pub fn new(slug: String, name_ko: String) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            name_ko,
            name_en: None,
            description: None,
            logo_image_url: None,
            cover_image_url: None,
            website_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the brand's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the brand's slug
    pub fn get_slug(&self) -> String {
        self.slug.clone()
    }

    /// Gets the Korean display name
    pub fn get_name_ko(&self) -> String {
        self.name_ko.clone()
    }

    /// Gets the Latin display name
    pub fn get_name_en(&self) -> Option<String> {
        self.name_en.clone()
    }

    /// Sets the Latin display name
    pub fn set_name_en(&mut self, name_en: Option<String>) {
        self.name_en = name_en;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the brand description
    pub fn get_description(&self) -> Option<String> {
        self.description.clone()
    }

    /// Sets the brand description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the logo image URL
    pub fn get_logo_image_url(&self) -> Option<String> {
        self.logo_image_url.clone()
    }

    /// Sets the logo image URL
    pub fn set_logo_image_url(&mut self, logo_image_url: Option<String>) {
        self.logo_image_url = logo_image_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the cover image URL
    pub fn get_cover_image_url(&self) -> Option<String> {
        self.cover_image_url.clone()
    }

    /// Sets the cover image URL
    pub fn set_cover_image_url(&mut self, cover_image_url: Option<String>) {
        self.cover_image_url = cover_image_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the external website URL
    pub fn get_website_url(&self) -> Option<String> {
        self.website_url.clone()
    }

    /// Sets the external website URL
    pub fn set_website_url(&mut self, website_url: Option<String>) {
        self.website_url = website_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// The image shown on brand tiles: the logo, else the cover
    pub fn display_image_url(&self) -> Option<String> {
        self.logo_image_url
            .clone()
            .or_else(|| self.cover_image_url.clone())
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
