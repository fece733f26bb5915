use std::collections::HashMap;

use anyhow::{Context, Result};
use diesel::prelude::*;
use tracing::{debug, instrument, warn};

use crate::db::DbPool;
use crate::filter::FilterState;
use crate::models::{Brand, Item};
use crate::schema::{brands, items};
use crate::views::{BrandCatalog, BrandWithCount, ProjectWithRelations};

use super::project_repo;

/// Lists all brands ordered by Korean name
///
/// When the typed query comes back empty the function retries once
/// with a raw SQL statement before concluding the catalog has no
/// brands. Some deployments have seen the typed path return nothing
/// against otherwise healthy databases, and the raw retry papers over
/// that until the row is reproduced.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// A vector of all brands, ordered by name_ko ascending
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool))]
pub fn list_brands(pool: &DbPool) -> Result<Vec<Brand>> {
    debug!("Listing brands");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let listed: Vec<Brand> = brands::table
        .order(brands::name_ko.asc())
        .select(Brand::as_select())
        .load(conn)
        .context("Failed to load brands")?;

    if !listed.is_empty() {
        return Ok(listed);
    }

    // Typed query found nothing. Retry over raw SQL before reporting
    // an empty catalog.
    warn!("Typed brand query returned no rows, retrying with raw SQL");
    let raw: Vec<Brand> = diesel::sql_query("SELECT * FROM brands ORDER BY name_ko ASC")
        .load(conn)
        .context("Failed to load brands with raw SQL")?;

    debug!("Raw brand query returned {} rows", raw.len());
    Ok(raw)
}

/// Retrieves a brand by its slug together with its items and the
/// visible projects that feature them
///
/// The items are loaded first. A brand without items cannot appear in
/// any project, so in that case the project lookup is skipped and the
/// catalog carries an empty project list.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `slug` - The URL slug of the brand
///
/// ### Returns
///
/// The brand catalog if found, or None if no brand has this slug
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool), fields(slug = %slug))]
pub fn get_brand_by_slug(pool: &DbPool, slug: &str) -> Result<Option<BrandCatalog>> {
    debug!("Retrieving brand by slug");

    // Get a connection from the pool
    let conn = &mut pool.get()?;

    let brand = brands::table
        .filter(brands::slug.eq(slug))
        .select(Brand::as_select())
        .first::<Brand>(conn)
        .optional()
        .context("Failed to load brand")?;

    let Some(brand) = brand else {
        debug!("No brand with this slug");
        return Ok(None);
    };

    let brand_items: Vec<Item> = items::table
        .filter(items::brand_id.eq(brand.get_id()))
        .order(items::name.asc())
        .select(Item::as_select())
        .load(conn)
        .context("Failed to load brand items")?;

    let projects = if brand_items.is_empty() {
        // No items means no project can feature this brand
        Vec::new()
    } else {
        let item_ids: Vec<String> = brand_items.iter().map(|i| i.get_id()).collect();
        project_repo::visible_project_cards_for_items(conn, &item_ids)?
    };

    Ok(Some(BrandCatalog {
        brand,
        items: brand_items,
        projects,
    }))
}

/// Counts, per brand, how many of the given projects feature at least
/// one of the brand's items
///
/// ### Arguments
///
/// * `brands` - The brands to count for
/// * `projects` - The hydrated projects to count over
///
/// ### Returns
///
/// A map from brand id to the number of matching projects
pub fn count_projects_by_brand(
    brands: &[Brand],
    projects: &[ProjectWithRelations],
) -> HashMap<String, usize> {
    brands
        .iter()
        .map(|brand| {
            let brand_id = brand.get_id();
            let count = projects
                .iter()
                .filter(|project| {
                    project
                        .items
                        .iter()
                        .any(|link| link.brand.as_ref().is_some_and(|b| b.id == brand_id))
                })
                .count();
            (brand_id, count)
        })
        .collect()
}

/// Lists all brands together with their visible project counts
///
/// The brand list and the project list are fetched independently and
/// combined in memory.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// A vector of brands with counts, in the same order as `list_brands`
///
/// ### Errors
///
/// Returns an error if a database operation fails
#[instrument(skip(pool))]
pub fn list_brands_with_counts(pool: &DbPool) -> Result<Vec<BrandWithCount>> {
    let listed = list_brands(pool)?;
    let projects = project_repo::list_projects(pool, &FilterState::default())?;
    let counts = count_projects_by_brand(&listed, &projects);

    Ok(listed
        .into_iter()
        .map(|brand| {
            let project_count = counts.get(&brand.get_id()).copied().unwrap_or(0);
            BrandWithCount {
                brand,
                project_count,
            }
        })
        .collect())
}
