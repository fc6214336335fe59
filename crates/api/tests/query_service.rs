//! Integration tests for the cache-aside read path.

mod common;

use chrono::NaiveDate;
use common::{build_custom_state, build_test_state, FailingCache};
use playhub_cache::CacheStore;
use playhub_core::cache_keys;
use playhub_db::models::{CreateGame, CreateNotification};
use playhub_db::store::{GameStore, NotificationStore, Stores, SubscriptionTypeStore};
use std::sync::Arc;

fn create_game(title: &str) -> CreateGame {
    CreateGame {
        title: title.to_string(),
        genre: "strategy".to_string(),
        release_date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
        subscription_type_ids: vec![],
    }
}

// ---------------------------------------------------------------------------
// Test: a miss reads through to the store and repopulates the cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn miss_reads_through_and_repopulates() {
    let test = build_test_state();

    let game = test.stores.games.insert(create_game("Star Forge")).await.unwrap();

    let games = test.state.queries.get_games().await.expect("read should succeed");
    assert_eq!(games, vec![game]);

    // The result set must now be cached under the well-known key.
    let cached = test
        .cache
        .get(cache_keys::GAMES_KEY)
        .await
        .expect("cache get should succeed");
    assert!(cached.is_some(), "read-through must repopulate the cache");
}

// ---------------------------------------------------------------------------
// Test: a fresh cache entry is served without touching the repository
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hit_is_served_from_cache_without_store_access() {
    let test = build_test_state();

    test.stores.games.insert(create_game("Star Forge")).await.unwrap();
    let first = test.state.queries.get_games().await.unwrap();
    assert_eq!(first.len(), 1);

    // Write straight to the store, bypassing the command service (and so
    // bypassing invalidation). A cache-served read cannot see this row.
    test.stores.games.insert(create_game("Hidden Game")).await.unwrap();

    let second = test.state.queries.get_games().await.unwrap();
    assert_eq!(
        second, first,
        "a fresh cache entry must be served as-is, without a repository query"
    );
}

// ---------------------------------------------------------------------------
// Test: an expired entry forces repopulation from the repository
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expired_entry_forces_repopulation() {
    let test = build_test_state();

    // Seed a stale cached result set that expires immediately.
    let stale = serde_json::to_vec(&Vec::<playhub_db::models::Game>::new()).unwrap();
    test.cache
        .set(cache_keys::GAMES_KEY, stale, 0)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let game = test.stores.games.insert(create_game("Star Forge")).await.unwrap();

    let games = test.state.queries.get_games().await.unwrap();
    assert_eq!(
        games,
        vec![game],
        "an expired entry must behave as a miss and repopulate from the store"
    );
}

// ---------------------------------------------------------------------------
// Test: a corrupt cache entry degrades to a miss
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_entry_degrades_to_miss() {
    let test = build_test_state();

    test.cache
        .set(cache_keys::GAMES_KEY, b"not json at all".to_vec(), 60)
        .await
        .unwrap();

    let game = test.stores.games.insert(create_game("Star Forge")).await.unwrap();

    let games = test.state.queries.get_games().await.unwrap();
    assert_eq!(games, vec![game]);
}

// ---------------------------------------------------------------------------
// Test: an unreachable cache never fails a read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_cache_degrades_to_store_read() {
    let stores = Stores::memory();
    let (state, _bus) = build_custom_state(stores.clone(), Arc::new(FailingCache));

    let game = stores.games.insert(create_game("Star Forge")).await.unwrap();

    let games = state
        .queries
        .get_games()
        .await
        .expect("a cache outage must not fail the read");
    assert_eq!(games, vec![game]);
}

// ---------------------------------------------------------------------------
// Test: notification reads are cached per user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notifications_are_cached_per_user() {
    let test = build_test_state();

    test.stores
        .notifications
        .insert(CreateNotification {
            user_id: 1,
            content: "New game launched: Star Forge".to_string(),
        })
        .await
        .unwrap();

    let for_u1 = test.state.queries.get_notifications(1).await.unwrap();
    assert_eq!(for_u1.len(), 1);

    let for_u2 = test.state.queries.get_notifications(2).await.unwrap();
    assert!(for_u2.is_empty());

    // Each user gets an independent cache entry.
    assert!(test
        .cache
        .get(&cache_keys::notifications_key(1))
        .await
        .unwrap()
        .is_some());
    assert!(test
        .cache
        .get(&cache_keys::notifications_key(2))
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Test: subscription types follow the same read-through contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subscription_types_read_through() {
    let test = build_test_state();

    let created = test
        .stores
        .subscription_types
        .insert(playhub_db::models::CreateSubscriptionType {
            name: "strategy-fans".to_string(),
            description: "Strategy game launches".to_string(),
            associated_game_ids: vec![],
        })
        .await
        .unwrap();

    let listed = test.state.queries.get_subscription_types().await.unwrap();
    assert_eq!(listed, vec![created]);
    assert!(test
        .cache
        .get(cache_keys::SUBSCRIPTION_TYPES_KEY)
        .await
        .unwrap()
        .is_some());
}
