//! Repository semantics against real PostgreSQL storage, in particular the
//! absence markers: update on an unknown id returns `None`, delete on an
//! unknown id returns `false`.

use std::sync::OnceLock;

use chrono::{Duration, Utc};
use taskboard_backend::models::assignee::{CreateAssignee, UpdateAssignee};
use taskboard_backend::models::label::{CreateLabel, Label, UpdateLabel};
use taskboard_backend::models::notification::Notification;
use taskboard_backend::repositories::notification::NotificationRepository;
use taskboard_backend::repositories::{
    AssigneeRepository, CrudRepository, PgNotificationRepository, UserRepository,
};
use tokio::sync::Mutex;
use uuid::Uuid;

#[path = "db_support/mod.rs"]
mod db_support;

async fn integration_guard() -> tokio::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().await
}

#[tokio::test]
async fn custom_entity_update_and_delete_report_unknown_ids() {
    let _guard = integration_guard().await;
    let pool = db_support::test_pool().await;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    sqlx::query("TRUNCATE labels")
        .execute(&pool)
        .await
        .expect("truncate labels");

    let repo = CrudRepository::<Label>::new();
    let created = repo
        .create(
            &pool,
            &CreateLabel {
                name: "bug".into(),
                color: Some("#d73a4a".into()),
            },
        )
        .await
        .expect("create label");
    assert_eq!(created.name, "bug");

    let changes = UpdateLabel {
        name: Some("defect".into()),
        color: None,
    };
    let updated = repo
        .update(&pool, created.id, &changes)
        .await
        .expect("update label")
        .expect("existing id updates");
    assert_eq!(updated.name, "defect");
    // omitted field keeps its stored value
    assert_eq!(updated.color.as_deref(), Some("#d73a4a"));

    let missing = repo
        .update(&pool, Uuid::new_v4(), &UpdateLabel::default())
        .await
        .expect("update unknown id");
    assert!(missing.is_none());

    assert!(repo.delete(&pool, created.id).await.expect("delete label"));
    assert!(!repo
        .delete(&pool, created.id)
        .await
        .expect("delete already-removed label"));
}

#[tokio::test]
async fn assignee_repository_reports_unknown_ids_and_resolves_users() {
    let _guard = integration_guard().await;
    let pool = db_support::test_pool().await;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    sqlx::query("TRUNCATE assignees, users CASCADE")
        .execute(&pool)
        .await
        .expect("truncate assignees and users");

    let user = db_support::seed_user(&pool).await;
    let repo = AssigneeRepository::new();
    let created = repo
        .create(
            &pool,
            &CreateAssignee {
                task_id: Uuid::new_v4(),
                user_id: user.id,
            },
        )
        .await
        .expect("create assignee");

    let listed = repo.find_all(&pool).await.expect("list assignees");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user.id, user.id);
    assert_eq!(listed[0].user.username, user.username);

    let missing = repo
        .update(&pool, Uuid::new_v4(), &UpdateAssignee::default())
        .await
        .expect("update unknown id");
    assert!(missing.is_none());

    assert!(!repo
        .delete(&pool, Uuid::new_v4())
        .await
        .expect("delete unknown id"));
    assert!(repo
        .delete(&pool, created.id)
        .await
        .expect("delete assignee"));
}

#[tokio::test]
async fn user_repository_delete_reports_unknown_id() {
    let _guard = integration_guard().await;
    let pool = db_support::test_pool().await;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    sqlx::query("TRUNCATE users CASCADE")
        .execute(&pool)
        .await
        .expect("truncate users");

    let user = db_support::seed_user(&pool).await;
    let repo = UserRepository::new();
    let found = repo
        .find_by_username(&pool, &user.username)
        .await
        .expect("find seeded user");
    assert!(found.is_some());

    assert!(!repo
        .delete(&pool, Uuid::new_v4())
        .await
        .expect("delete unknown id"));
    assert!(repo.delete(&pool, user.id).await.expect("delete user"));
}

#[tokio::test]
async fn notification_storage_orders_newest_first_and_flags_seen() {
    let _guard = integration_guard().await;
    let pool = db_support::test_pool().await;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    sqlx::query("TRUNCATE notifications, users CASCADE")
        .execute(&pool)
        .await
        .expect("truncate notifications and users");

    let user = db_support::seed_user(&pool).await;
    let repo = PgNotificationRepository::new(pool.clone());

    let older = Notification {
        id: Uuid::new_v4(),
        user_id: user.id,
        content: "first".into(),
        seen: false,
        created_at: Utc::now() - Duration::minutes(5),
    };
    repo.insert(&older).await.expect("insert older");
    let newer = Notification::new(user.id, "second".into());
    repo.insert(&newer).await.expect("insert newer");

    let page = repo
        .list_for_user(user.id, 10, 0)
        .await
        .expect("list notifications");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].content, "second");
    assert_eq!(page[1].content, "first");

    assert!(repo.mark_seen(older.id).await.expect("mark seen"));
    assert!(!repo
        .mark_seen(Uuid::new_v4())
        .await
        .expect("mark unknown id"));
}
