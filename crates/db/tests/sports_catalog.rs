//! Integration tests for the sports events catalog.
//!
//! Seeds the bundled events file and exercises category filtering,
//! visibility, ordering, category decoding and lookups.

use assert_matches::assert_matches;
use racebook_core::error::CoreError;
use racebook_core::ordering::SortTerm;
use racebook_core::sports::EventCategory;
use racebook_db::models::event::{EventSortKey, ListEventsRequest};
use racebook_db::repositories::EventRepo;
use racebook_db::seed::{builtin_events, seed_events};
use sqlx::SqlitePool;

async fn seeded(pool: &SqlitePool) -> usize {
    let events = builtin_events().unwrap();
    seed_events(pool, &events).await.unwrap()
}

fn ordered(order_by: Vec<SortTerm<EventSortKey>>) -> ListEventsRequest {
    ListEventsRequest {
        order_by,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_without_filter_returns_every_seeded_event(pool: SqlitePool) {
    let seeded = seeded(&pool).await;

    let events = EventRepo::list(&pool, &ListEventsRequest::default()).await.unwrap();
    assert_eq!(events.len(), seeded);
    assert!(events.iter().all(|e| e.id != 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_categories(pool: SqlitePool) {
    seeded(&pool).await;

    let wanted = [
        EventCategory::Basketball,
        EventCategory::Soccer,
        EventCategory::Tennis,
    ];
    let expected = builtin_events()
        .unwrap()
        .iter()
        .filter(|e| ["BASKETBALL", "SOCCER", "TENNIS"].contains(&e.category.as_str()))
        .count();

    let request = ListEventsRequest {
        categories: wanted.to_vec(),
        ..Default::default()
    };
    let events = EventRepo::list(&pool, &request).await.unwrap();

    assert!(!events.is_empty());
    assert_eq!(events.len(), expected);
    assert!(events.iter().all(|e| wanted.contains(&e.category)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visible_only(pool: SqlitePool) {
    seeded(&pool).await;

    let request = ListEventsRequest {
        visible_only: true,
        ..Default::default()
    };
    let events = EventRepo::list(&pool, &request).await.unwrap();

    let expected: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE id <> 0 AND visible = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(events.len() as i64, expected.0);
    assert!(events.iter().all(|e| e.visible));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_by_start_time(pool: SqlitePool) {
    seeded(&pool).await;

    let asc = EventRepo::list(
        &pool,
        &ordered(vec![SortTerm::asc(EventSortKey::AdvertisedStartTime)]),
    )
    .await
    .unwrap();
    assert!(asc
        .windows(2)
        .all(|w| w[0].advertised_start_time <= w[1].advertised_start_time));

    let desc = EventRepo::list(
        &pool,
        &ordered(vec![SortTerm::desc(EventSortKey::AdvertisedStartTime)]),
    )
    .await
    .unwrap();
    assert!(desc
        .windows(2)
        .all(|w| w[0].advertised_start_time >= w[1].advertised_start_time));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_by_competition_then_name(pool: SqlitePool) {
    seeded(&pool).await;

    let events = EventRepo::list(
        &pool,
        &ordered(vec![
            SortTerm::asc(EventSortKey::Competition),
            SortTerm::desc(EventSortKey::Name),
        ]),
    )
    .await
    .unwrap();

    for w in events.windows(2) {
        assert!(w[0].competition <= w[1].competition);
        if w[0].competition == w[1].competition {
            assert!(w[0].name >= w[1].name);
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conflicting_order_is_rejected(pool: SqlitePool) {
    seeded(&pool).await;

    let result = EventRepo::list(
        &pool,
        &ordered(vec![
            SortTerm::desc(EventSortKey::Name),
            SortTerm::asc(EventSortKey::Competition),
            SortTerm::asc(EventSortKey::Name),
        ]),
    )
    .await;

    assert_matches!(result, Err(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Category decoding and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unrecognised_category_reads_as_unknown(pool: SqlitePool) {
    sqlx::query(
        "INSERT INTO events (id, name, category, competition, visible, advertised_start_time) \
         VALUES (1, 'Finals Night', 'DARTS', 'World Matchplay', 1, '2026-10-15T10:00:00Z')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let event = EventRepo::find_by_id(&pool, 1).await.unwrap();
    assert_eq!(event.category, EventCategory::Unknown);
    assert_eq!(event.name, "Finals Night");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_matches_listing(pool: SqlitePool) {
    seeded(&pool).await;

    let listed = EventRepo::list(&pool, &ListEventsRequest::default()).await.unwrap();
    let first = listed.first().unwrap();

    let found = EventRepo::find_by_id(&pool, first.id).await.unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.name, first.name);
    assert_eq!(found.category, first.category);
    assert_eq!(found.competition, first.competition);
    assert_eq!(found.visible, first.visible);
    assert_eq!(found.advertised_start_time, first.advertised_start_time);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_event_is_not_found(pool: SqlitePool) {
    seeded(&pool).await;

    let result = EventRepo::find_by_id(&pool, 9_999).await;
    assert_matches!(
        result,
        Err(CoreError::NotFound {
            entity: "Event",
            id: 9_999
        })
    );
}
