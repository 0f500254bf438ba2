use blog_service::{PostWithAuthor, ProjectSummary, Query, UserProfile};
use chrono::{TimeZone, Utc};
use entity::{post, project, user};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DbConn, Schema, Set};

async fn setup_db() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(db.get_database_backend());
    let builder = db.get_database_backend();
    for stmt in [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(post::Entity),
        schema.create_table_from_entity(project::Entity),
    ] {
        db.execute(builder.build(&stmt)).await.unwrap();
    }

    db
}

async fn insert_user(db: &DbConn, name: &str, email: &str, password: &str) -> user::Model {
    user::ActiveModel {
        name: Set(name.to_owned()),
        email: Set(email.to_owned()),
        password: Set(password.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_post(
    db: &DbConn,
    title: &str,
    content: &str,
    day: u32,
    user_id: i32,
) -> post::Model {
    post::ActiveModel {
        title: Set(title.to_owned()),
        content: Set(content.to_owned()),
        created_at: Set(Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[tokio::test]
async fn lists_posts_with_author_names_newest_first() {
    let db = setup_db().await;
    let alice = insert_user(&db, "Alice", "alice@example.com", "hash-a").await;
    let bob = insert_user(&db, "Bob", "bob@example.com", "hash-b").await;

    let older = insert_post(&db, "Hello", "First!", 10, alice.id).await;
    let newer = insert_post(&db, "Answer", "Second!", 12, bob.id).await;

    let posts = Query::list_posts_with_authors(&db).await.unwrap();

    assert_eq!(
        posts,
        vec![
            PostWithAuthor {
                id: newer.id,
                title: "Answer".to_owned(),
                content: "Second!".to_owned(),
                created_at: newer.created_at,
                author: "Bob".to_owned(),
            },
            PostWithAuthor {
                id: older.id,
                title: "Hello".to_owned(),
                content: "First!".to_owned(),
                created_at: older.created_at,
                author: "Alice".to_owned(),
            },
        ]
    );
}

#[tokio::test]
async fn finds_one_post_with_author() {
    let db = setup_db().await;
    let alice = insert_user(&db, "Alice", "alice@example.com", "hash-a").await;
    let post = insert_post(&db, "Hello", "First!", 10, alice.id).await;

    let found = Query::find_post_with_author(&db, post.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id, post.id);
    assert_eq!(found.title, "Hello");
    assert_eq!(found.author, "Alice");
}

#[tokio::test]
async fn missing_post_is_none() {
    let db = setup_db().await;
    insert_user(&db, "Alice", "alice@example.com", "hash-a").await;

    let found = Query::find_post_with_author(&db, 9999).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn profile_includes_projects() {
    let db = setup_db().await;
    let alice = insert_user(&db, "Alice", "alice@example.com", "hash-a").await;

    let project = project::ActiveModel {
        name: Set("Blog engine".to_owned()),
        description: Set(Some("The very blog you are reading.".to_owned())),
        user_id: Set(alice.id),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let profile = Query::find_user_profile(&db, alice.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        profile,
        UserProfile {
            id: alice.id,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            projects: vec![ProjectSummary {
                id: project.id,
                name: "Blog engine".to_owned(),
                description: Some("The very blog you are reading.".to_owned()),
            }],
        }
    );
}

#[tokio::test]
async fn profile_never_carries_the_password() {
    let db = setup_db().await;
    let alice = insert_user(&db, "Alice", "alice@example.com", "super-secret-hash").await;

    let profile = Query::find_user_profile(&db, alice.id)
        .await
        .unwrap()
        .unwrap();

    let serialized = serde_json::to_value(&profile).unwrap();
    let object = serialized.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!serialized.to_string().contains("super-secret-hash"));
}

#[tokio::test]
async fn profile_of_unknown_user_is_none() {
    let db = setup_db().await;

    let profile = Query::find_user_profile(&db, 42).await.unwrap();

    assert!(profile.is_none());
}
