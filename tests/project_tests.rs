/// Integration tests for project browsing
///
/// This file contains tests for the project endpoints:
/// - Listing visible projects in catalog order
/// - Filtering via URL query parameters
/// - Fetching a project page by slug
/// - The cover-image fallback and gallery assembly
/// - Handling non-existent and unpublished slugs

mod common;

use common::*;
use serde_json::Value;
use showroom::models::{Item, Project, ProjectStatus, TagKind};

#[tokio::test]
async fn test_list_projects_excludes_unpublished() {
    let (app, pool) = create_test_app();

    seed_published_project(&pool, "library", "City Library", Some(2022));

    let mut draft = Project::new("draft".to_string(), "Draft Project".to_string());
    draft.set_status(Some(ProjectStatus::Draft));
    seed_project(&pool, &draft);

    let mut hidden = Project::new("hidden".to_string(), "Hidden Project".to_string());
    hidden.set_status(Some(ProjectStatus::Hidden));
    seed_project(&pool, &hidden);

    // A NULL status counts as visible
    seed_project(&pool, &Project::new("legacy".to_string(), "Legacy Project".to_string()));

    let listed = get_json(&app, "/projects", 200).await;
    let slugs: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["project"]["slug"].as_str().unwrap())
        .collect();

    assert_eq!(slugs.len(), 2);
    assert!(slugs.contains(&"library"));
    assert!(slugs.contains(&"legacy"));
}

#[tokio::test]
async fn test_list_projects_order_year_desc_nulls_last() {
    let (app, pool) = create_test_app();

    seed_published_project(&pool, "older", "Older", Some(2019));
    seed_published_project(&pool, "newest", "Newest", Some(2024));
    seed_published_project(&pool, "undated", "Undated", None);
    seed_published_project(&pool, "alpha", "Alpha", Some(2024));

    let listed = get_json(&app, "/projects", 200).await;
    let slugs: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["project"]["slug"].as_str().unwrap())
        .collect();

    // 2024 before 2019, title ascending within a year, no year last
    assert_eq!(slugs, vec!["alpha", "newest", "older", "undated"]);
}

#[tokio::test]
async fn test_list_projects_text_search_is_case_insensitive() {
    let (app, pool) = create_test_app();

    let mut library = Project::new("library".to_string(), "City Library".to_string());
    library.set_status(Some(ProjectStatus::Published));
    library.set_description(Some("Reading rooms with oak shelving".to_string()));
    seed_project(&pool, &library);

    seed_published_project(&pool, "lobby", "Hotel Lobby", Some(2021));

    let listed = get_json(&app, "/projects?q=OAK", 200).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["project"]["slug"], "library");
}

#[tokio::test]
async fn test_list_projects_search_matches_tag_names() {
    let (app, pool) = create_test_app();

    let library = seed_published_project(&pool, "library", "City Library", Some(2022));
    seed_published_project(&pool, "lobby", "Hotel Lobby", Some(2021));

    let tag = seed_tag(&pool, "public-space", TagKind::Project);
    link_project_tag(&pool, &library, &tag);

    // A keyword equal to a tag name finds every project carrying the tag
    let listed = get_json(&app, "/projects?q=public-space", 200).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["project"]["slug"], "library");
}

#[tokio::test]
async fn test_list_projects_filter_dimensions_combine_with_and() {
    let (app, pool) = create_test_app();

    let library = seed_published_project(&pool, "library", "City Library", Some(2022));
    let lobby = seed_published_project(&pool, "lobby", "Hotel Lobby", Some(2022));
    seed_published_project(&pool, "cafe", "Corner Cafe", Some(2020));

    let tag = seed_tag(&pool, "public-space", TagKind::Project);
    link_project_tag(&pool, &library, &tag);
    link_project_tag(&pool, &lobby, &tag);

    // years alone keeps both 2022 projects
    let listed = get_json(&app, "/projects?years=2022", 200).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);

    // adding the text dimension narrows to one
    let listed = get_json(&app, "/projects?years=2022&q=library", 200).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["project"]["slug"], "library");

    // categories use tag names; combined with years they still AND
    let listed = get_json(&app, "/projects?years=2020&categories=public-space", 200).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_projects_year_set_is_or_within_dimension() {
    let (app, pool) = create_test_app();

    seed_published_project(&pool, "a", "A", Some(2020));
    seed_published_project(&pool, "b", "B", Some(2022));
    seed_published_project(&pool, "c", "C", Some(2024));

    let listed = get_json(&app, "/projects?years=2020,2024", 200).await;
    let slugs: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["project"]["slug"].as_str().unwrap())
        .collect();

    assert_eq!(slugs, vec!["c", "a"]);
}

#[tokio::test]
async fn test_list_projects_brand_filter() {
    let (app, pool) = create_test_app();

    let library = seed_published_project(&pool, "library", "City Library", Some(2022));
    seed_published_project(&pool, "lobby", "Hotel Lobby", Some(2021));

    let brand = showroom::models::Brand::new("oak-co".to_string(), "오크가구".to_string());
    seed_brand(&pool, &brand);

    let mut chair = Item::new("stack-chair".to_string(), "Stack Chair".to_string());
    chair.set_brand_id(Some(brand.get_id()));
    seed_item(&pool, &chair);
    link_project_item(&pool, &library, &chair);

    let uri = format!("/projects?brands={}", brand.get_id());
    let listed = get_json(&app, &uri, 200).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["project"]["slug"], "library");
}

#[tokio::test]
async fn test_get_project_page_cover_falls_back_to_first_image() {
    let (app, pool) = create_test_app();

    let project = seed_published_project(&pool, "library", "City Library", Some(2022));

    // No explicit cover; three ordered photos
    let first = seed_photo(&pool, "https://cdn.example/1.jpg");
    let second = seed_photo(&pool, "https://cdn.example/2.jpg");
    let third = seed_photo(&pool, "https://cdn.example/3.jpg");
    link_project_photo(&pool, &project, &first, Some(1));
    link_project_photo(&pool, &project, &second, Some(2));
    link_project_photo(&pool, &project, &third, Some(3));

    let page = get_json(&app, "/projects/library", 200).await;

    // The first image serves as cover and leaves the gallery
    assert_eq!(page["cover_image_url"], "https://cdn.example/1.jpg");
    let gallery: Vec<&str> = page["gallery"]
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["image_url"].as_str().unwrap())
        .collect();
    assert_eq!(gallery, vec!["https://cdn.example/2.jpg", "https://cdn.example/3.jpg"]);
}

#[tokio::test]
async fn test_get_project_page_explicit_cover_keeps_gallery() {
    let (app, pool) = create_test_app();

    let mut project = Project::new("library".to_string(), "City Library".to_string());
    project.set_status(Some(ProjectStatus::Published));
    project.set_cover_image_url(Some("https://cdn.example/cover.jpg".to_string()));
    seed_project(&pool, &project);

    let photo = seed_photo(&pool, "https://cdn.example/1.jpg");
    link_project_photo(&pool, &project, &photo, Some(1));

    let page = get_json(&app, "/projects/library", 200).await;

    assert_eq!(page["cover_image_url"], "https://cdn.example/cover.jpg");
    assert_eq!(page["gallery"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_project_page_scopes_tags_to_project_kind() {
    let (app, pool) = create_test_app();

    let project = seed_published_project(&pool, "library", "City Library", Some(2022));

    let project_tag = seed_tag(&pool, "public-space", TagKind::Project);
    let item_tag = seed_tag(&pool, "chair", TagKind::Item);
    link_project_tag(&pool, &project, &project_tag);
    link_project_tag(&pool, &project, &item_tag);

    let page = get_json(&app, "/projects/library", 200).await;
    let tags = page["tags"].as_array().unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "public-space");
}

#[tokio::test]
async fn test_get_project_unknown_slug_is_null() {
    let (app, _pool) = create_test_app();

    let page = get_json(&app, "/projects/no-such-project", 200).await;
    assert!(page.is_null());
}

#[tokio::test]
async fn test_get_project_unpublished_slug_is_null() {
    let (app, pool) = create_test_app();

    let mut draft = Project::new("draft".to_string(), "Draft Project".to_string());
    draft.set_status(Some(ProjectStatus::Draft));
    seed_project(&pool, &draft);

    let page = get_json(&app, "/projects/draft", 200).await;
    assert!(page.is_null());
}

#[tokio::test]
async fn test_project_photos_carry_their_items() {
    let (app, pool) = create_test_app();

    let project = seed_published_project(&pool, "library", "City Library", Some(2022));
    let photo = seed_photo(&pool, "https://cdn.example/1.jpg");
    link_project_photo(&pool, &project, &photo, Some(1));

    let chair = Item::new("stack-chair".to_string(), "Stack Chair".to_string());
    seed_item(&pool, &chair);
    link_photo_item(&pool, &photo, &chair);

    let gallery = get_json(&app, "/projects/library/photos", 200).await;
    let gallery = gallery.as_array().unwrap();

    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0]["photo"]["image_url"], "https://cdn.example/1.jpg");
    let items = gallery[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "stack-chair");
}

#[tokio::test]
async fn test_project_photos_unknown_slug_degrades_to_empty() {
    let (app, _pool) = create_test_app();

    let gallery = get_json(&app, "/projects/no-such-project/photos", 200).await;
    assert_eq!(gallery, Value::Array(vec![]));
}
