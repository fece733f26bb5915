/// Common test utilities for Showroom integration tests
///
/// This file contains shared functions and utilities for all integration tests,
/// including test application setup, seed helpers for catalog fixtures, and
/// request helpers.
///
/// The catalog itself has no public write endpoints, so fixtures are inserted
/// directly through Diesel using the public models and schema.

use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use serde_json::Value;
use showroom::{
    create_app,
    db::{init_pool, DbPool},
    models::{
        Brand, Inquiry, Item, ItemTag, Photo, PhotoItem, Project, ProjectItem, ProjectPhoto,
        ProjectStatus, ProjectTag, Tag, TagKind,
    },
    notify::Notifier,
    schema::{
        brands, inquiries, item_tags, items, photo_items, photos, project_items, project_photos,
        project_tags, projects, tags,
    },
    AppState,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Creates a fresh in-memory database pool with migrations applied
///
/// Each call uses a unique shared-cache URI so every connection in the
/// pool sees the same database while tests stay isolated from each other.
pub fn create_test_pool() -> Arc<DbPool> {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = Arc::new(init_pool(&database_url));

    let conn = &mut pool.get().unwrap();
    conn.batch_execute("PRAGMA foreign_keys = ON").unwrap();
    showroom::run_migrations(conn);

    pool
}

/// Creates a test application with an in-memory SQLite database
///
/// Notifications are disabled; use `create_test_app_with_notifier` for
/// tests that exercise the mail path.
///
/// ### Returns
///
/// The Axum Router and the pool it is connected to, so tests can seed
/// fixtures and inspect rows directly
pub fn create_test_app() -> (Router, Arc<DbPool>) {
    let pool = create_test_pool();
    let app = create_app(AppState::new(pool.clone(), Notifier::disabled()));
    (app, pool)
}

/// Creates a test application with a specific notifier
pub fn create_test_app_with_notifier(notifier: Notifier) -> (Router, Arc<DbPool>) {
    let pool = create_test_pool();
    let app = create_app(AppState::new(pool.clone(), notifier));
    (app, pool)
}

/// Sends a GET request to the app and returns the parsed JSON body
///
/// Panics if the response status differs from the expected one.
pub async fn get_json(app: &Router, uri: &str, expected_status: u16) -> Value {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.status().as_u16(),
        expected_status,
        "unexpected status for GET {}",
        uri
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Sends a POST request with a JSON body and returns status and parsed body
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (u16, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed = serde_json::from_slice(&bytes).unwrap();
    (status, parsed)
}

// ── Seed helpers ─────────────────────────────────────────────────────

/// Seeds a published project with the given slug, title and year
pub fn seed_published_project(
    pool: &DbPool,
    slug: &str,
    title: &str,
    year: Option<i32>,
) -> Project {
    let mut project = Project::new(slug.to_string(), title.to_string());
    project.set_status(Some(ProjectStatus::Published));
    project.set_year(year);
    seed_project(pool, &project);
    project
}

pub fn seed_project(pool: &DbPool, project: &Project) {
    diesel::insert_into(projects::table)
        .values(project.clone())
        .execute(&mut pool.get().unwrap())
        .expect("Failed to seed project");
}

pub fn seed_brand(pool: &DbPool, brand: &Brand) {
    diesel::insert_into(brands::table)
        .values(brand.clone())
        .execute(&mut pool.get().unwrap())
        .expect("Failed to seed brand");
}

pub fn seed_item(pool: &DbPool, item: &Item) {
    diesel::insert_into(items::table)
        .values(item.clone())
        .execute(&mut pool.get().unwrap())
        .expect("Failed to seed item");
}

pub fn seed_tag(pool: &DbPool, name: &str, kind: TagKind) -> Tag {
    let tag = Tag::new(name.to_string(), kind);
    diesel::insert_into(tags::table)
        .values(tag.clone())
        .execute(&mut pool.get().unwrap())
        .expect("Failed to seed tag");
    tag
}

pub fn seed_photo(pool: &DbPool, image_url: &str) -> Photo {
    let photo = Photo::new(image_url.to_string());
    diesel::insert_into(photos::table)
        .values(photo.clone())
        .execute(&mut pool.get().unwrap())
        .expect("Failed to seed photo");
    photo
}

pub fn link_project_photo(pool: &DbPool, project: &Project, photo: &Photo, sort_order: Option<i32>) {
    diesel::insert_into(project_photos::table)
        .values(ProjectPhoto::new(project.get_id(), photo.get_id(), sort_order))
        .execute(&mut pool.get().unwrap())
        .expect("Failed to link project photo");
}

pub fn link_project_item(pool: &DbPool, project: &Project, item: &Item) {
    diesel::insert_into(project_items::table)
        .values(ProjectItem::new(project.get_id(), item.get_id()))
        .execute(&mut pool.get().unwrap())
        .expect("Failed to link project item");
}

pub fn link_project_tag(pool: &DbPool, project: &Project, tag: &Tag) {
    diesel::insert_into(project_tags::table)
        .values(ProjectTag::new(project.get_id(), tag.get_id()))
        .execute(&mut pool.get().unwrap())
        .expect("Failed to link project tag");
}

pub fn link_item_tag(pool: &DbPool, item: &Item, tag: &Tag) {
    diesel::insert_into(item_tags::table)
        .values(ItemTag::new(item.get_id(), tag.get_id()))
        .execute(&mut pool.get().unwrap())
        .expect("Failed to link item tag");
}

pub fn link_photo_item(pool: &DbPool, photo: &Photo, item: &Item) {
    diesel::insert_into(photo_items::table)
        .values(PhotoItem::new(photo.get_id(), item.get_id()))
        .execute(&mut pool.get().unwrap())
        .expect("Failed to link photo item");
}

/// Loads all stored inquiries for assertions
pub fn stored_inquiries(pool: &DbPool) -> Vec<Inquiry> {
    inquiries::table.load(&mut pool.get().unwrap()).unwrap()
}
