use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a furniture item in the catalog
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Item {
    /// Unique identifier for the item (UUID v4 as string)
    id: String,

    /// URL-addressable identifier, unique across items
    slug: String,

    /// The display name of the item
    name: String,

    /// Longer description shown on the detail page
    description: Option<String>,

    /// Primary product image
    image_url: Option<String>,

    /// Listing on the public-procurement marketplace
    market_url: Option<String>,

    /// The brand this item belongs to, if any
    brand_id: Option<String>,

    /// When this item was created
    created_at: NaiveDateTime,

    /// When this item was last updated
    updated_at: NaiveDateTime,
}

impl Item {
    /// Creates a new item
    ///
    /// ### Arguments
    ///
    /// * `slug` - The URL-addressable identifier
    /// * `name` - The display name
    ///
    /// ### Returns
    ///
    /// A new `Item` with a generated ID and no optional fields set
    pub fn new(slug: String, name: String) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            name,
            description: None,
            image_url: None,
            market_url: None,
            brand_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the item's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the item's slug
    pub fn get_slug(&self) -> String {
        self.slug.clone()
    }

    /// Gets the item's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the item's description
    pub fn get_description(&self) -> Option<String> {
        self.description.clone()
    }

    /// Sets the item's description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the primary product image URL
    pub fn get_image_url(&self) -> Option<String> {
        self.image_url.clone()
    }

    /// Sets the primary product image URL
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.image_url = image_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the marketplace listing URL
    pub fn get_market_url(&self) -> Option<String> {
        self.market_url.clone()
    }

    /// Sets the marketplace listing URL
    pub fn set_market_url(&mut self, market_url: Option<String>) {
        self.market_url = market_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the owning brand's ID
    pub fn get_brand_id(&self) -> Option<String> {
        self.brand_id.clone()
    }

    /// Sets the owning brand's ID
    pub fn set_brand_id(&mut self, brand_id: Option<String>) {
        self.brand_id = brand_id;
        self.updated_at = Utc::now().naive_utc();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new(
            "oak-reading-table".to_string(),
            "Oak Reading Table".to_string(),
        );

        assert_eq!(item.get_slug(), "oak-reading-table");
        assert_eq!(item.get_name(), "Oak Reading Table");
        assert_eq!(item.get_brand_id(), None);
        assert!(Uuid::parse_str(&item.get_id()).is_ok());
    }
}
