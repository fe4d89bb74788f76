use std::collections::HashSet;
use std::sync::Arc;

use recboard_core::models::category::Category;
use recboard_core::models::recommendation::RecommendationInput;
use recboard_core::sheet_layout;
use recboard_storage::error::StorageError;
use recboard_storage::memory::MemoryStore;
use recboard_storage::repository::{decode_row, RecommendationRepository};

fn input(category: Category, by: &str, title: &str) -> RecommendationInput {
    RecommendationInput {
        category,
        recommended_by: by.to_string(),
        title: title.to_string(),
        link: String::new(),
        notes: String::new(),
        follow_regularly: false,
    }
}

fn repo_with(store: MemoryStore) -> (Arc<MemoryStore>, RecommendationRepository) {
    let store = Arc::new(store);
    let repo = RecommendationRepository::new(store.clone());
    (store, repo)
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn add_to_empty_store_then_list_returns_it() {
    let (_, repo) = repo_with(MemoryStore::new());
    assert!(repo.list().await.is_empty());

    assert!(repo.add(&input(Category::Read, "Ann", "Book A")).await);

    let items = repo.list().await;
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.category, Category::Read);
    assert_eq!(item.title, "Book A");
    assert_eq!(item.recommended_by, "Ann");
    assert!(!item.follow_regularly);
    assert!(!item.id.is_empty());
    assert!(item.created_at.is_some());
}

#[tokio::test]
async fn add_assigns_a_fresh_id_and_keeps_store_order() {
    let (_, repo) = repo_with(MemoryStore::seeded());
    let before = repo.list().await;
    let existing: HashSet<String> = before.iter().map(|r| r.id.clone()).collect();

    let mut new = input(Category::Follow, "Bo", "Someone worth following");
    new.link = "https://example.com".to_string();
    new.notes = "weekly".to_string();
    new.follow_regularly = true;
    let id = repo.try_add(&new).await.expect("add");

    let after = repo.list().await;
    assert_eq!(after.len(), before.len() + 1);
    assert!(!existing.contains(&id));

    let added = after.last().expect("appended last");
    assert_eq!(added.id, id);
    assert_eq!(added.to_input(), new);
    assert_eq!(&after[..before.len()], &before[..]);
}

#[tokio::test]
async fn update_replaces_mutable_fields_only() {
    let (store, repo) = repo_with(MemoryStore::new());
    let id = repo.try_add(&input(Category::Read, "Ann", "Book A")).await.expect("add");
    repo.try_add(&input(Category::Watch, "Cy", "Film B")).await.expect("add");
    let original = repo.list().await.remove(0);

    let mut replacement = input(Category::Listen, "Ann Lee", "Podcast A");
    replacement.notes = "changed my mind".to_string();
    replacement.follow_regularly = true;
    assert!(repo.update(&id, &replacement).await);

    let items = repo.list().await;
    assert_eq!(items.len(), 2);
    let updated = &items[0];
    assert_eq!(updated.id, id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.to_input(), replacement);
    assert_eq!(items[1].title, "Film B");

    let raw = store.snapshot();
    assert_eq!(raw[1][sheet_layout::ID], id);
    assert_eq!(raw[1].len(), sheet_layout::COLUMNS.len());
}

#[tokio::test]
async fn update_unknown_id_fails_without_side_effects() {
    let (store, repo) = repo_with(MemoryStore::seeded());
    let before = store.snapshot();

    assert!(!repo.update("does-not-exist", &input(Category::Read, "X", "Y")).await);
    assert!(matches!(
        repo.try_update("does-not-exist", &input(Category::Read, "X", "Y")).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(!repo.update("", &input(Category::Read, "X", "Y")).await);

    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn update_does_not_match_the_header_row() {
    let (store, repo) = repo_with(MemoryStore::seeded());
    let before = store.snapshot();

    assert!(!repo.update("id", &input(Category::Read, "X", "Y")).await);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn failing_store_degrades_to_empty_and_false() {
    let (store, repo) = repo_with(MemoryStore::seeded());
    store.fail_with("network down");

    assert!(repo.list().await.is_empty());
    assert!(!repo.add(&input(Category::Read, "Ann", "Book A")).await);
    assert!(!repo.update("1", &input(Category::Read, "Ann", "Book A")).await);
    assert!(matches!(
        repo.try_update("1", &input(Category::Read, "Ann", "Book A")).await,
        Err(StorageError::Unavailable(_))
    ));

    store.recover();
    assert_eq!(repo.list().await.len(), 7);
}

#[tokio::test]
async fn list_skips_blank_and_unknown_category_rows() {
    let grid = vec![
        row(&sheet_layout::COLUMNS),
        row(&["1", "read", "Ann", "Book A"]),
        row(&[]),
        row(&["2", "podcast", "Bo", "Mystery"]),
        row(&["3", " Watch ", "Cy", "Film", "", "", "TRUE"]),
    ];
    let (_, repo) = repo_with(MemoryStore::from_grid(grid));

    let items = repo.list().await;
    let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
    assert_eq!(items[1].category, Category::Watch);
    assert!(items[1].follow_regularly);
}

#[tokio::test]
async fn listed_id_with_padded_cell_is_updatable() {
    let grid = vec![
        row(&sheet_layout::COLUMNS),
        row(&[" 5 ", "read", "Ann", "Book A", "", "", "false", "2025-12-01T10:00:00Z"]),
    ];
    let (store, repo) = repo_with(MemoryStore::from_grid(grid));

    let listed = repo.list().await;
    assert_eq!(listed[0].id, "5");

    let replacement = input(Category::Watch, "Ann", "Film A");
    assert!(repo.update(&listed[0].id, &replacement).await);

    let items = repo.list().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "5");
    assert_eq!(items[0].to_input(), replacement);
    assert_eq!(items[0].created_at, listed[0].created_at);
    assert_eq!(store.snapshot()[1][sheet_layout::ID], " 5 ");
}

#[test]
fn decode_row_defaults_missing_cells() {
    let item = decode_row(&row(&["42", "listen"])).expect("decodes").expect("has id");
    assert_eq!(item.id, "42");
    assert_eq!(item.category, Category::Listen);
    assert_eq!(item.recommended_by, "");
    assert_eq!(item.title, "");
    assert_eq!(item.link, "");
    assert_eq!(item.notes, "");
    assert!(!item.follow_regularly);
    assert!(item.created_at.is_none());
}

#[test]
fn decode_row_reads_created_at() {
    let item = decode_row(&row(&[
        "7", "read", "Ann", "Book", "", "", "false", "2025-12-01T10:00:00Z",
    ]))
    .expect("decodes")
    .expect("has id");
    let expected: jiff::Timestamp = "2025-12-01T10:00:00Z".parse().expect("timestamp");
    assert_eq!(item.created_at, Some(expected));
}

#[test]
fn decode_row_rejects_unknown_category() {
    assert!(decode_row(&row(&["1", "unknown"])).is_err());
    assert!(decode_row(&row(&["", "unknown"])).expect("blank id").is_none());
}
