use std::collections::HashMap;

use anyhow::{Context, Result};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::{debug, instrument};

use crate::db::DbPool;
use crate::models::{Brand, Item, ItemTag, Tag, TagKind};
use crate::schema::{brands, item_tags, items, tags};
use crate::views::{BrandRef, ItemPage, ItemWithRelations, TagLink};

use super::project_repo;

/// Lists all items with their brand summary and tags
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// A vector of items ordered by name ascending
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool))]
pub fn list_items(pool: &DbPool) -> Result<Vec<ItemWithRelations>> {
    debug!("Listing items");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let rows: Vec<(Item, Option<Brand>)> = items::table
        .left_join(brands::table)
        .order(items::name.asc())
        .select((Item::as_select(), Option::<Brand>::as_select()))
        .load(conn)
        .context("Failed to load items")?;

    let ids: Vec<String> = rows.iter().map(|(item, _)| item.get_id()).collect();
    let mut tags_by_item = load_tags_for_items(conn, &ids)?;

    let listed = rows
        .into_iter()
        .map(|(item, brand)| {
            let id = item.get_id();
            ItemWithRelations {
                brand: brand.as_ref().map(BrandRef::from_brand),
                tags: tags_by_item.remove(&id).unwrap_or_default(),
                item,
            }
        })
        .collect();

    Ok(listed)
}

/// Retrieves a single item by its slug, assembled as a detail page
///
/// The page carries only the item's item-kind tags and the visible
/// projects that feature it, newest first.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The URL slug of the item
///
/// ### Returns
///
/// The item page if found, or None if no item has this slug
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool), fields(slug = %slug))]
pub fn get_item_by_slug(pool: &DbPool, slug: &str) -> Result<Option<ItemPage>> {
    debug!("Retrieving item by slug");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let row: Option<(Item, Option<Brand>)> = items::table
        .left_join(brands::table)
        .filter(items::slug.eq(slug))
        .select((Item::as_select(), Option::<Brand>::as_select()))
        .first::<(Item, Option<Brand>)>(conn)
        .optional()
        .context("Failed to load item")?;

    let Some((item, brand)) = row else {
        debug!("No item with this slug");
        return Ok(None);
    };

    let item_id = item.get_id();
    let mut tags_by_item = load_tags_for_items(conn, &[item_id.clone()])?;
    let tags: Vec<TagLink> = tags_by_item
        .remove(&item_id)
        .unwrap_or_default()
        .into_iter()
        .filter(|tag| tag.kind == TagKind::Item)
        .collect();

    let projects = project_repo::visible_project_cards_for_items(conn, &[item_id])?;

    Ok(Some(ItemPage {
        brand: brand.as_ref().map(BrandRef::from_brand),
        tags,
        projects,
        item,
    }))
}

/// Loads the tags for a batch of items, grouped by item id
///
/// Tags with an unknown kind are dropped.
fn load_tags_for_items(
    conn: &mut SqliteConnection,
    item_ids: &[String],
) -> Result<HashMap<String, Vec<TagLink>>> {
    if item_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let tag_rows: Vec<(ItemTag, Tag)> = item_tags::table
        .inner_join(tags::table)
        .filter(item_tags::item_id.eq_any(item_ids))
        .select((ItemTag::as_select(), Tag::as_select()))
        .load(conn)
        .context("Failed to load item tags")?;

    let mut tags_by_item: HashMap<String, Vec<TagLink>> = HashMap::new();
    for (link, tag) in tag_rows {
        if let Some(tag_link) = TagLink::from_tag(&tag) {
            tags_by_item
                .entry(link.get_item_id())
                .or_default()
                .push(tag_link);
        }
    }
    Ok(tags_by_item)
}
