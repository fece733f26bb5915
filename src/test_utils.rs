use crate::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use diesel::RunQueryDsl;
use diesel::connection::SimpleConnection;
use proptest::prelude::*;
use std::sync::Arc;
use tower::ServiceExt;

use crate::filter::FilterState;

/// Sets up a test database with migrations applied
///
/// This function:
/// 1. Creates an in-memory SQLite database
/// 2. Enables foreign key constraints
/// 3. Runs all migrations to set up the schema
///
/// ### Returns
///
/// An Arc-wrapped database connection pool connected to the in-memory database
pub fn setup_test_db() -> Arc<db::DbPool> {
    // Use a unique shared in-memory database for each test.
    // Plain ":memory:" gives each connection its own separate database,
    // so migrations run on one connection wouldn't be visible on others.
    // By using a unique URI with cache=shared, all connections in this pool
    // share the same in-memory database while remaining isolated from other tests.
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url);

    // Get a connection from the pool
    let mut conn = pool.get().expect("Failed to get connection");

    // Enable foreign key constraints for SQLite
    conn.batch_execute("PRAGMA foreign_keys = ON").unwrap();

    // Run all migrations to set up the schema
    run_migrations(&mut conn);

    // Wrap the pool in an Arc for thread-safe sharing
    Arc::new(pool)
}

use diesel::QueryableByName;
use diesel::sql_types::Text;

#[derive(QueryableByName, Debug)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Tests the setup_test_db function
///
/// This test verifies that:
/// 1. The test database can be created and connected to
/// 2. The database has the expected tables
/// 3. The database can be queried successfully
#[tokio::test]
async fn test_setup_test_db() {
    let pool = setup_test_db();
    assert!(pool.get().is_ok());

    // Check that all migrations were run, i.e. the tables were created
    let mut conn = pool.get().unwrap();
    let table_names: Vec<TableName> =
        diesel::sql_query("SELECT name FROM sqlite_master WHERE type='table'")
            .load(&mut conn)
            .expect("Failed to load table names");

    assert!(table_names.len() > 0, "No tables found in the database");

    let expected_tables = vec![
        "brands",
        "inquiries",
        "item_tags",
        "items",
        "photo_items",
        "photos",
        "project_items",
        "project_photos",
        "project_tags",
        "projects",
        "tags",
        "__diesel_schema_migrations", // Diesel's migration tracking table
    ];

    for table in expected_tables {
        let exists = table_names.iter().any(|t| t.name == table);
        assert!(exists, "Table '{}' not found in database", table);

        // Test a simple query on each table
        let query = format!("SELECT COUNT(*) FROM {}", table);
        let result = diesel::sql_query(&query).execute(&mut conn);
        assert!(result.is_ok(), "Failed to query table '{}': {:?}", table, result.err());
    }

    drop(conn);

    // test interacting with the app
    let app = create_app(AppState::new(pool.clone(), notify::Notifier::disabled()));

    let request = Request::builder()
        .uri("/tags")
        .method("GET")
        .body(Body::empty())
        .unwrap();

    // send the request to the app
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Response status is not OK (err: {:?})",
        axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap()
    );
}

/// Generates a set member that survives the comma-separated wire format:
/// non-empty, comma-free, no surrounding whitespace
pub fn arb_member_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9가-힣_.-]{1,12}"
}

/// Generates free search text; commas are allowed here because the
/// search parameter is never split
pub fn arb_search_string() -> impl Strategy<Value = String> {
    "[ -~가-힣]{0,16}"
}

/// Generates a set of list-dimension members
pub fn arb_member_set() -> impl Strategy<Value = std::collections::BTreeSet<String>> {
    prop::collection::btree_set(arb_member_string(), 0..4)
}

/// Generates a set of completion years
pub fn arb_year_set() -> impl Strategy<Value = std::collections::BTreeSet<i32>> {
    prop::collection::btree_set(1990i32..2035i32, 0..4)
}

/// Generates an arbitrary filter state across all dimensions
pub fn arb_filter_state() -> impl Strategy<Value = FilterState> {
    (
        arb_search_string(),
        arb_member_set(),
        arb_member_set(),
        arb_member_set(),
        arb_year_set(),
    )
        .prop_map(|(q, categories, tags, brands, years)| FilterState {
            q,
            categories,
            tags,
            brands,
            years,
        })
}
