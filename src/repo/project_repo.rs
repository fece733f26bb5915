use std::collections::HashMap;

use anyhow::{Context, Result};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::{debug, instrument};

use crate::db::DbPool;
use crate::filter::FilterState;
use crate::models::{Brand, Item, Photo, Project, ProjectItem, ProjectPhoto, ProjectTag, Tag};
use crate::schema::{brands, items, photos, project_items, project_photos, project_tags, projects, tags};
use crate::views::{ImageRef, ItemLink, ProjectCard, ProjectWithRelations, TagLink};

/// Lists all visible projects with their images, tags and items
///
/// Projects are visible when their status is "published" or unset.
/// The whole visible catalog is fetched and hydrated first, then the
/// given filter is applied in memory. Searching needs the resolved tag
/// names, so the narrowing cannot happen in SQL without losing the
/// tag-name dimension.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `filter` - The filter to apply after hydration
///
/// ### Returns
///
/// A vector of hydrated projects ordered by year descending (projects
/// without a year last) and title ascending within a year
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool, filter))]
pub fn list_projects(pool: &DbPool, filter: &FilterState) -> Result<Vec<ProjectWithRelations>> {
    debug!("Listing visible projects");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let visible = projects::table
        .filter(projects::status.is_null().or(projects::status.eq("published")))
        .order((
            projects::year.is_null().asc(),
            projects::year.desc(),
            projects::title.asc(),
        ))
        .select(Project::as_select())
        .load(conn)
        .context("Failed to load projects")?;

    let mut hydrated = hydrate_projects(conn, visible)?;

    if !filter.is_empty() {
        hydrated.retain(|candidate| filter.matches(candidate));
    }

    debug!("Listed {} projects", hydrated.len());
    Ok(hydrated)
}

/// Retrieves a single visible project by its slug
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The URL slug of the project
///
/// ### Returns
///
/// The hydrated project if found, or None if no visible project has
/// this slug
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool), fields(slug = %slug))]
pub fn get_project_by_slug(pool: &DbPool, slug: &str) -> Result<Option<ProjectWithRelations>> {
    debug!("Retrieving project by slug");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let project = projects::table
        .filter(projects::slug.eq(slug))
        .filter(projects::status.is_null().or(projects::status.eq("published")))
        .select(Project::as_select())
        .first::<Project>(conn)
        .optional()
        .context("Failed to load project")?;

    let Some(project) = project else {
        debug!("No visible project with this slug");
        return Ok(None);
    };

    let mut hydrated = hydrate_projects(conn, vec![project])?;
    Ok(hydrated.pop())
}

/// Attaches images, tags and item links to a batch of projects
///
/// Images keep their gallery order (sort order ascending, unsorted
/// entries last). Tags with an unknown kind are dropped. The input
/// order of the projects is preserved.
pub(crate) fn hydrate_projects(
    conn: &mut SqliteConnection,
    projects: Vec<Project>,
) -> Result<Vec<ProjectWithRelations>> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<String> = projects.iter().map(|p| p.get_id()).collect();

    // Gallery images, one junction row per photo, in gallery order
    let image_rows: Vec<(ProjectPhoto, Photo)> = project_photos::table
        .inner_join(photos::table)
        .filter(project_photos::project_id.eq_any(&ids))
        .order((
            project_photos::sort_order.is_null().asc(),
            project_photos::sort_order.asc(),
        ))
        .select((ProjectPhoto::as_select(), Photo::as_select()))
        .load(conn)
        .context("Failed to load project images")?;

    let mut images_by_project: HashMap<String, Vec<ImageRef>> = HashMap::new();
    for (link, photo) in image_rows {
        images_by_project
            .entry(link.get_project_id())
            .or_default()
            .push(ImageRef::new(&photo, link.get_sort_order()));
    }

    let tag_rows: Vec<(ProjectTag, Tag)> = project_tags::table
        .inner_join(tags::table)
        .filter(project_tags::project_id.eq_any(&ids))
        .select((ProjectTag::as_select(), Tag::as_select()))
        .load(conn)
        .context("Failed to load project tags")?;

    let mut tags_by_project: HashMap<String, Vec<TagLink>> = HashMap::new();
    for (link, tag) in tag_rows {
        if let Some(tag_link) = TagLink::from_tag(&tag) {
            tags_by_project
                .entry(link.get_project_id())
                .or_default()
                .push(tag_link);
        }
    }

    // Items shown in the project, with their brand summary when one is set
    let item_rows: Vec<(ProjectItem, (Item, Option<Brand>))> = project_items::table
        .inner_join(items::table.left_join(brands::table))
        .filter(project_items::project_id.eq_any(&ids))
        .select((
            ProjectItem::as_select(),
            (Item::as_select(), Option::<Brand>::as_select()),
        ))
        .load(conn)
        .context("Failed to load project items")?;

    let mut items_by_project: HashMap<String, Vec<ItemLink>> = HashMap::new();
    for (link, (item, brand)) in item_rows {
        items_by_project
            .entry(link.get_project_id())
            .or_default()
            .push(ItemLink::new(&item, brand.as_ref()));
    }

    let mut hydrated = Vec::with_capacity(projects.len());
    for project in projects {
        let id = project.get_id();
        hydrated.push(ProjectWithRelations {
            project,
            images: images_by_project.remove(&id).unwrap_or_default(),
            tags: tags_by_project.remove(&id).unwrap_or_default(),
            items: items_by_project.remove(&id).unwrap_or_default(),
        });
    }
    Ok(hydrated)
}

/// Collects the visible projects that feature any of the given items,
/// as cards ready for a listing
///
/// The result is deduplicated by project id and ordered like the main
/// project listing. An empty item set short-circuits to an empty
/// result without touching the database.
pub(crate) fn visible_project_cards_for_items(
    conn: &mut SqliteConnection,
    item_ids: &[String],
) -> Result<Vec<ProjectCard>> {
    if item_ids.is_empty() {
        return Ok(Vec::new());
    }

    let project_ids: Vec<String> = project_items::table
        .filter(project_items::item_id.eq_any(item_ids))
        .select(project_items::project_id)
        .load(conn)
        .context("Failed to load project links")?;

    if project_ids.is_empty() {
        return Ok(Vec::new());
    }

    let linked = projects::table
        .filter(projects::id.eq_any(&project_ids))
        .filter(projects::status.is_null().or(projects::status.eq("published")))
        .order((
            projects::year.is_null().asc(),
            projects::year.desc(),
            projects::title.asc(),
        ))
        .select(Project::as_select())
        .load(conn)
        .context("Failed to load linked projects")?;

    // Hydration brings the images needed for the cover fallback
    let hydrated = hydrate_projects(conn, linked)?;
    Ok(hydrated.iter().map(ProjectWithRelations::to_card).collect())
}
