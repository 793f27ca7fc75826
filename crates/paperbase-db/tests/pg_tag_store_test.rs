//! Postgres-backed TagStore integration tests.
//!
//! These require a provisioned database and are ignored by default:
//!
//!   DATABASE_URL=postgres://... cargo test -p paperbase-db -- --ignored

use paperbase_db::{
    create_pool, run_migrations, test_fixtures::DEFAULT_TEST_DATABASE_URL, PgTagStore,
    TagReconciler, TagStore,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a test database connection pool.
///
/// Uses the DATABASE_URL environment variable if set, otherwise
/// defaults to the local test database on port 15432.
async fn setup_test_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string());
    let pool = create_pool(&database_url)
        .await
        .expect("Failed to create test pool");
    run_migrations(&pool).await.expect("Failed to migrate");
    pool
}

fn unique_name(base: &str) -> String {
    format!("{}-{}", base, Uuid::new_v4())
}

/// Tags with different casing must resolve to the same record.
#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_tag_case_insensitive_uniqueness() {
    let pool = setup_test_pool().await;
    let store = PgTagStore::new(pool);

    let name = unique_name("invoice");
    let created = store.create(&name.to_uppercase()).await.expect("create");
    let found = store
        .find_by_name(&name)
        .await
        .expect("find")
        .expect("tag should exist");

    assert_eq!(created.id, found.id);
    assert_eq!(found.name, found.name.to_lowercase());
}

/// Creating the same name twice converges on one row.
#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_create_is_upsert() {
    let pool = setup_test_pool().await;
    let store = PgTagStore::new(pool);

    let name = unique_name("finance");
    let first = store.create(&name).await.expect("first create");
    let second = store.create(&name).await.expect("second create");
    assert_eq!(first.id, second.id);
}

/// replace_links is a full replacement and is idempotent.
#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_reconcile_full_replacement() {
    let pool = setup_test_pool().await;

    // The join table references document rows, so insert one.
    let document_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO document (id, filename, size_bytes, uploaded_at_utc, storage_key, owner_id, kind)
         VALUES ($1, 'test.pdf', 1024, NOW(), 'bucket/test.pdf', $2, 'pdf')",
    )
    .bind(document_id)
    .bind(Uuid::new_v4())
    .execute(&pool)
    .await
    .expect("insert document");

    let reconciler = TagReconciler::new(PgTagStore::new(pool.clone()));
    let first_set = vec![unique_name("invoice"), unique_name("financial")];

    let outcome_a = reconciler
        .reconcile(document_id, &first_set)
        .await
        .expect("first reconcile");
    let outcome_b = reconciler
        .reconcile(document_id, &first_set)
        .await
        .expect("second reconcile");
    assert_eq!(outcome_a.count, 2);
    assert_eq!(outcome_a.count, outcome_b.count);

    let replacement = vec![unique_name("travel")];
    let outcome_c = reconciler
        .reconcile(document_id, &replacement)
        .await
        .expect("replacement reconcile");
    assert_eq!(outcome_c.count, 1);

    let links = reconciler
        .store()
        .links_for_document(document_id)
        .await
        .expect("links");
    assert_eq!(links, outcome_c.tag_ids);
}
