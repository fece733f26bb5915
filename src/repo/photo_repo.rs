use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::{debug, instrument, warn};

use crate::db::DbPool;
use crate::models::{Brand, Item, Photo, PhotoItem, Project, ProjectPhoto};
use crate::schema::{brands, items, photo_items, photos, project_photos, projects};
use crate::views::{ItemLink, ItemPhoto, PhotoPage, PhotoWithItems, ProjectRef};

/// Lists the photos in a project's gallery with the items visible in
/// each photo
///
/// The gallery is a nice-to-have on the detail pages, so this never
/// fails the caller: any error is logged and an empty list returned.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `project_id` - The id of the project
///
/// ### Returns
///
/// The gallery photos in gallery order, or an empty vector when the
/// project has none or the lookup fails
#[instrument(skip(pool), fields(project_id = %project_id))]
pub fn list_photos_for_project(pool: &DbPool, project_id: &str) -> Vec<PhotoWithItems> {
    match try_list_photos_for_project(pool, project_id) {
        Ok(gallery) => gallery,
        Err(e) => {
            warn!("Failed to load photos for project {}: {:#}", project_id, e);
            Vec::new()
        }
    }
}

fn try_list_photos_for_project(pool: &DbPool, project_id: &str) -> Result<Vec<PhotoWithItems>> {
    debug!("Listing photos for project");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    // Step 1: the junction rows, in gallery order
    let links: Vec<ProjectPhoto> = project_photos::table
        .filter(project_photos::project_id.eq(project_id))
        .order((
            project_photos::sort_order.is_null().asc(),
            project_photos::sort_order.asc(),
        ))
        .select(ProjectPhoto::as_select())
        .load(conn)
        .context("Failed to load gallery links")?;

    if links.is_empty() {
        return Ok(Vec::new());
    }

    // Step 2: the referenced photos and the items shown in them
    let photo_ids: Vec<String> = links.iter().map(|l| l.get_photo_id()).collect();

    let loaded: Vec<Photo> = photos::table
        .filter(photos::id.eq_any(&photo_ids))
        .select(Photo::as_select())
        .load(conn)
        .context("Failed to load photos")?;
    let photos_by_id: HashMap<String, Photo> =
        loaded.into_iter().map(|p| (p.get_id(), p)).collect();

    let mut items_by_photo = load_items_for_photos(conn, &photo_ids)?;

    // Assemble in junction order, skipping dangling links
    let gallery = links
        .iter()
        .filter_map(|link| {
            let photo = photos_by_id.get(&link.get_photo_id())?;
            Some(PhotoWithItems {
                photo: photo.clone(),
                sort_order: link.get_sort_order(),
                items: items_by_photo.remove(&link.get_photo_id()).unwrap_or_default(),
            })
        })
        .collect();

    Ok(gallery)
}

/// Lists the photos that show a given item, each with the visible
/// project it was taken in
///
/// Photos whose projects are all unpublished are skipped. Like the
/// project gallery this degrades to an empty list on failure.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `item_id` - The id of the item
///
/// ### Returns
///
/// The photos featuring the item, newest first, or an empty vector
/// when there are none or the lookup fails
#[instrument(skip(pool), fields(item_id = %item_id))]
pub fn list_photos_for_item(pool: &DbPool, item_id: &str) -> Vec<ItemPhoto> {
    match try_list_photos_for_item(pool, item_id) {
        Ok(listed) => listed,
        Err(e) => {
            warn!("Failed to load photos for item {}: {:#}", item_id, e);
            Vec::new()
        }
    }
}

fn try_list_photos_for_item(pool: &DbPool, item_id: &str) -> Result<Vec<ItemPhoto>> {
    debug!("Listing photos for item");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    // Step 1: which photos show this item
    let photo_ids: Vec<String> = photo_items::table
        .filter(photo_items::item_id.eq(item_id))
        .select(photo_items::photo_id)
        .load(conn)
        .context("Failed to load photo links")?;

    if photo_ids.is_empty() {
        return Ok(Vec::new());
    }

    // Step 2: each photo with the visible project it belongs to
    let rows: Vec<(Photo, Project)> = project_photos::table
        .inner_join(photos::table)
        .inner_join(projects::table)
        .filter(project_photos::photo_id.eq_any(&photo_ids))
        .filter(projects::status.is_null().or(projects::status.eq("published")))
        .order(photos::created_at.desc())
        .select((Photo::as_select(), Project::as_select()))
        .load(conn)
        .context("Failed to load photos with projects")?;

    // A photo can sit in several galleries; keep its first visible project
    let mut seen = HashSet::new();
    let listed = rows
        .into_iter()
        .filter(|(photo, _)| seen.insert(photo.get_id()))
        .map(|(photo, project)| ItemPhoto {
            project: ProjectRef::from_project(&project),
            photo,
        })
        .collect();

    Ok(listed)
}

/// Retrieves a single photo by its id, assembled as a detail page
///
/// The page carries the visible project the photo belongs to and the
/// items shown in it. A photo whose projects are all unpublished is
/// treated as absent.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `photo_id` - The id of the photo
///
/// ### Returns
///
/// The photo page if found, or None when no photo has this id or none
/// of its projects is visible
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool), fields(photo_id = %photo_id))]
pub fn get_photo_by_id(pool: &DbPool, photo_id: &str) -> Result<Option<PhotoPage>> {
    debug!("Retrieving photo by id");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let row: Option<(Photo, Project)> = project_photos::table
        .inner_join(photos::table)
        .inner_join(projects::table)
        .filter(photos::id.eq(photo_id))
        .filter(projects::status.is_null().or(projects::status.eq("published")))
        .select((Photo::as_select(), Project::as_select()))
        .first::<(Photo, Project)>(conn)
        .optional()
        .context("Failed to load photo")?;

    let Some((photo, project)) = row else {
        debug!("No visible photo with this id");
        return Ok(None);
    };

    let id = photo.get_id();
    let mut items_by_photo = load_items_for_photos(conn, &[id.clone()])?;

    Ok(Some(PhotoPage {
        project: ProjectRef::from_project(&project),
        items: items_by_photo.remove(&id).unwrap_or_default(),
        photo,
    }))
}

/// Lists the most recent photos across the whole catalog with the
/// items visible in each
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `limit` - The maximum number of photos to return
///
/// ### Returns
///
/// A vector of photos, newest first
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool))]
pub fn list_photos(pool: &DbPool, limit: i64) -> Result<Vec<PhotoWithItems>> {
    debug!("Listing photo wall, limit {}", limit);

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let loaded: Vec<Photo> = photos::table
        .order(photos::created_at.desc())
        .limit(limit)
        .select(Photo::as_select())
        .load(conn)
        .context("Failed to load photos")?;

    let photo_ids: Vec<String> = loaded.iter().map(|p| p.get_id()).collect();
    let mut items_by_photo = load_items_for_photos(conn, &photo_ids)?;

    let wall = loaded
        .into_iter()
        .map(|photo| {
            let id = photo.get_id();
            PhotoWithItems {
                photo,
                sort_order: None,
                items: items_by_photo.remove(&id).unwrap_or_default(),
            }
        })
        .collect();

    Ok(wall)
}

/// Loads the items visible in a batch of photos, grouped by photo id
fn load_items_for_photos(
    conn: &mut SqliteConnection,
    photo_ids: &[String],
) -> Result<HashMap<String, Vec<ItemLink>>> {
    if photo_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let item_rows: Vec<(PhotoItem, (Item, Option<Brand>))> = photo_items::table
        .inner_join(items::table.left_join(brands::table))
        .filter(photo_items::photo_id.eq_any(photo_ids))
        .select((
            PhotoItem::as_select(),
            (Item::as_select(), Option::<Brand>::as_select()),
        ))
        .load(conn)
        .context("Failed to load photo items")?;

    let mut items_by_photo: HashMap<String, Vec<ItemLink>> = HashMap::new();
    for (link, (item, brand)) in item_rows {
        items_by_photo
            .entry(link.get_photo_id())
            .or_default()
            .push(ItemLink::new(&item, brand.as_ref()));
    }
    Ok(items_by_photo)
}
