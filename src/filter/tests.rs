use super::*;
use crate::models::{Item, Project, Tag};
use crate::views::{BrandRef, ItemLink, TagLink};

fn state_from_pairs(query: &str) -> FilterState {
    FilterState::parse(query)
}

fn project_candidate(
    title: &str,
    description: Option<&str>,
    year: Option<i32>,
    tags: Vec<&Tag>,
    brand_ids: Vec<&str>,
) -> ProjectWithRelations {
    let mut project = Project::new(title.to_lowercase().replace(' ', "-"), title.to_string());
    project.set_description(description.map(str::to_string));
    project.set_year(year);

    let items = brand_ids
        .into_iter()
        .map(|brand_id| {
            let item = Item::new(format!("item-for-{}", brand_id), "Item".to_string());
            ItemLink {
                id: item.get_id(),
                slug: item.get_slug(),
                name: item.get_name(),
                image_url: None,
                brand: Some(BrandRef {
                    id: brand_id.to_string(),
                    slug: brand_id.to_string(),
                    name_ko: brand_id.to_string(),
                    name_en: None,
                }),
            }
        })
        .collect();

    ProjectWithRelations {
        project,
        images: vec![],
        tags: tags.iter().filter_map(|tag| TagLink::from_tag(tag)).collect(),
        items,
    }
}

// ── Parsing ──────────────────────────────────────────────────────────

#[test]
fn test_parse_full_query() {
    let state = state_from_pairs("q=oak+table&categories=%EB%8F%84%EC%84%9C%EA%B4%80&brands=b1,b2&years=2021,2023");

    assert_eq!(state.q, "oak table");
    assert!(state.categories.contains("도서관"));
    assert_eq!(state.brands.len(), 2);
    assert!(state.brands.contains("b1"));
    assert!(state.brands.contains("b2"));
    assert!(state.years.contains(&2021));
    assert!(state.years.contains(&2023));
    assert!(state.tags.is_empty());
}

#[test]
fn test_parse_absent_params_mean_no_constraint() {
    let state = state_from_pairs("");
    assert!(state.is_empty());
    assert_eq!(state, FilterState::default());
}

#[test]
fn test_parse_drops_empty_segments() {
    let state = state_from_pairs("brands=,b1,,b2,&categories=,,");
    assert_eq!(state.brands.len(), 2);
    assert!(state.categories.is_empty());
}

#[test]
fn test_parse_drops_non_numeric_years() {
    let state = state_from_pairs("years=2020,twenty,2021.5,2022");
    assert_eq!(state.years.iter().copied().collect::<Vec<_>>(), vec![2020, 2022]);
}

#[test]
fn test_parse_ignores_unknown_params() {
    let state = state_from_pairs("q=chair&utm_source=newsletter&page=3");
    assert_eq!(state.q, "chair");
    assert!(state.categories.is_empty());
}

// ── Serialization ────────────────────────────────────────────────────

#[test]
fn test_serialize_omits_inactive_dimensions() {
    let mut state = FilterState::default();
    assert_eq!(state.to_query_string(), "");

    state.q = "chair".to_string();
    assert_eq!(state.to_query_string(), "q=chair");
}

#[test]
fn test_serialize_writes_sorted_members() {
    let mut state = FilterState::default();
    state.brands.insert("zeta".to_string());
    state.brands.insert("alpha".to_string());
    state.years.insert(2024);
    state.years.insert(2019);

    assert_eq!(state.to_query_string(), "brands=alpha%2Czeta&years=2019%2C2024");
}

#[test]
fn test_round_trip() {
    let mut state = FilterState::default();
    state.q = "라운지 체어".to_string();
    state.categories.insert("도서관".to_string());
    state.categories.insert("카페".to_string());
    state.tags.insert("t-1".to_string());
    state.brands.insert("b-9".to_string());
    state.years.insert(2022);

    let reparsed = FilterState::parse(&state.to_query_string());
    assert_eq!(reparsed, state);
}

#[test]
fn test_round_trip_empty() {
    let state = FilterState::default();
    assert_eq!(FilterState::parse(&state.to_query_string()), state);
}

// ── Matching ─────────────────────────────────────────────────────────

#[test]
fn test_empty_filter_matches_everything() {
    let library = Tag::new("도서관".to_string(), TagKind::Project);
    let candidate = project_candidate("Seoul Library", None, Some(2021), vec![&library], vec![]);

    assert!(FilterState::default().matches(&candidate));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let candidate = project_candidate(
        "Seoul Library Reading Room",
        Some("Oak tables throughout"),
        None,
        vec![],
        vec![],
    );

    let mut state = FilterState::default();
    state.q = "LIBRARY".to_string();
    assert!(state.matches(&candidate));

    state.q = "oak".to_string();
    assert!(state.matches(&candidate));

    state.q = "granite".to_string();
    assert!(!state.matches(&candidate));
}

#[test]
fn test_search_covers_tag_names() {
    let cafe = Tag::new("카페".to_string(), TagKind::Project);
    let candidate = project_candidate("Riverside Annex", None, None, vec![&cafe], vec![]);

    let mut state = FilterState::default();
    state.q = "카페".to_string();
    assert!(state.matches(&candidate));
}

#[test]
fn test_category_dimension_is_or_within() {
    let library = Tag::new("도서관".to_string(), TagKind::Project);
    let candidate = project_candidate("Seoul Library", None, None, vec![&library], vec![]);

    let mut state = FilterState::default();
    state.categories.insert("도서관".to_string());
    state.categories.insert("연수원".to_string());
    assert!(state.matches(&candidate));

    let mut miss = FilterState::default();
    miss.categories.insert("연수원".to_string());
    assert!(!miss.matches(&candidate));
}

#[test]
fn test_item_kind_tags_do_not_satisfy_project_categories() {
    let chair = Tag::new("Chair".to_string(), TagKind::Item);
    let candidate = project_candidate("Showfloor", None, None, vec![&chair], vec![]);

    let mut state = FilterState::default();
    state.categories.insert("Chair".to_string());
    assert!(!state.matches(&candidate));
}

#[test]
fn test_brand_dimension_checks_membership() {
    let candidate = project_candidate("Annex", None, None, vec![], vec!["b1", "b2"]);

    let mut state = FilterState::default();
    state.brands.insert("b2".to_string());
    assert!(state.matches(&candidate));

    let mut miss = FilterState::default();
    miss.brands.insert("b3".to_string());
    assert!(!miss.matches(&candidate));
}

#[test]
fn test_year_dimension_requires_a_year() {
    let dated = project_candidate("Dated", None, Some(2021), vec![], vec![]);
    let undated = project_candidate("Undated", None, None, vec![], vec![]);

    let mut state = FilterState::default();
    state.years.insert(2021);
    assert!(state.matches(&dated));
    assert!(!state.matches(&undated));
}

#[test]
fn test_dimensions_combine_with_and() {
    let library = Tag::new("도서관".to_string(), TagKind::Project);
    let candidate = project_candidate(
        "Seoul Library",
        Some("Reading hall"),
        Some(2021),
        vec![&library],
        vec!["b1"],
    );

    let mut state = FilterState::default();
    state.q = "reading".to_string();
    state.categories.insert("도서관".to_string());
    state.brands.insert("b1".to_string());
    state.years.insert(2021);
    assert!(state.matches(&candidate));

    // One failing dimension fails the whole candidate
    state.brands.clear();
    state.brands.insert("b2".to_string());
    assert!(!state.matches(&candidate));
}

// ── Store ────────────────────────────────────────────────────────────

#[test]
fn test_store_starts_from_mount_query() {
    let store = FilterStore::from_query("q=chair&brands=b1");
    let state = store.state();
    assert_eq!(state.q, "chair");
    assert!(state.brands.contains("b1"));
    assert_eq!(store.query_string(), "q=chair&brands=b1");
}

#[test]
fn test_store_toggle_inserts_then_removes() {
    let store = FilterStore::new();

    store.toggle_brand("b1");
    assert!(store.state().brands.contains("b1"));

    store.toggle_brand("b1");
    assert!(store.state().brands.is_empty());
    assert_eq!(store.query_string(), "");
}

#[test]
fn test_store_reset_clears_every_dimension() {
    let store = FilterStore::new();
    store.set_search("chair");
    store.toggle_category("도서관");
    store.toggle_tag("t1");
    store.toggle_brand("b1");
    store.toggle_year(2024);

    store.reset();

    assert!(store.state().is_empty());
    assert_eq!(store.query_string(), "");
}

#[test]
fn test_store_mirror_tracks_state() {
    let store = FilterStore::new();
    store.toggle_year(2022);
    store.toggle_year(2020);

    assert_eq!(store.query_string(), "years=2020%2C2022");
    assert_eq!(FilterState::parse(&store.query_string()), store.state());
}

#[tokio::test]
async fn test_store_notifies_subscribers_on_commit() {
    let store = FilterStore::new();
    let mut changes = store.subscribe();

    store.set_search("oak");

    let state = changes.recv().await.expect("change should be published");
    assert_eq!(state.q, "oak");
}

#[tokio::test]
async fn test_sync_from_query_replaces_state() {
    let store = FilterStore::from_query("q=chair");
    let mut changes = store.subscribe();

    store.sync_from_query("brands=b7");

    let state = changes.recv().await.expect("change should be published");
    assert!(state.q.is_empty());
    assert!(state.brands.contains("b7"));
    assert_eq!(store.query_string(), "brands=b7");
}

#[tokio::test]
async fn test_sync_with_own_output_is_silent() {
    let store = FilterStore::new();
    store.toggle_brand("b1");
    let mut changes = store.subscribe();

    // Feeding the store its own mirror back must not re-notify
    store.sync_from_query(&store.query_string());

    assert!(matches!(
        changes.try_recv(),
        Err(broadcast::error::TryRecvError::Empty)
    ));
    assert!(store.state().brands.contains("b1"));
}
