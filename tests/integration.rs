/// End-to-end tests for the Showroom application
///
/// This file walks the whole visitor flow through the HTTP surface:
/// browse the filtered project listing, open a project page, follow an
/// item into its brand, and finally submit an inquiry about the project.
///
/// Unlike the per-endpoint suites, these tests exercise one seeded
/// catalog across several requests, checking that the shapes agree with
/// each other along the way.

mod common;

use common::*;
use serde_json::json;
use showroom::models::{Brand, Item, TagKind};

#[tokio::test]
async fn test_browse_and_inquire_flow() {
    let (app, pool) = create_test_app();

    // A small catalog: one brand, one item, two projects, one of which
    // uses the item and carries a tagged, photographed gallery.
    let brand = Brand::new("oak-co".to_string(), "오크가구".to_string());
    seed_brand(&pool, &brand);

    let mut chair = Item::new("stack-chair".to_string(), "Stack Chair".to_string());
    chair.set_brand_id(Some(brand.get_id()));
    seed_item(&pool, &chair);

    let library = seed_published_project(&pool, "seoul-library", "Seoul Library", Some(2023));
    seed_published_project(&pool, "busan-cafe", "Busan Cafe", Some(2021));
    link_project_item(&pool, &library, &chair);

    let tag = seed_tag(&pool, "public-space", TagKind::Project);
    link_project_tag(&pool, &library, &tag);

    let photo = seed_photo(&pool, "https://cdn.example/library-1.jpg");
    link_project_photo(&pool, &library, &photo, Some(1));
    link_photo_item(&pool, &photo, &chair);

    // Filter the listing down to the library
    let listed = get_json(&app, "/projects?categories=public-space", 200).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["project"]["slug"], "seoul-library");

    // Open its page: the gallery image became the cover, the item link
    // carries the brand
    let page = get_json(&app, "/projects/seoul-library", 200).await;
    assert_eq!(page["cover_image_url"], "https://cdn.example/library-1.jpg");
    assert_eq!(page["items"][0]["slug"], "stack-chair");
    assert_eq!(page["items"][0]["brand"]["slug"], "oak-co");

    // Follow the item to its page, which points back at the project
    let item_page = get_json(&app, "/items/stack-chair", 200).await;
    assert_eq!(item_page["projects"][0]["slug"], "seoul-library");

    // And the brand catalog agrees
    let catalog = get_json(&app, "/brands/oak-co", 200).await;
    assert_eq!(catalog["items"][0]["slug"], "stack-chair");
    assert_eq!(catalog["projects"][0]["slug"], "seoul-library");

    // Finally, ask about the project
    let (status, receipt) = post_json(
        &app,
        "/inquiries",
        &json!({
            "name": "김지원",
            "email": "jiwon@example.com",
            "project_slug": "seoul-library",
            "message": "도서관 가구 견적 문의드립니다."
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(receipt["success"], true);

    let stored = stored_inquiries(&pool);
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0].get_project_slug(),
        Some("seoul-library".to_string())
    );
}

#[tokio::test]
async fn test_health_check() {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    let (app, _pool) = create_test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"OK");
}
