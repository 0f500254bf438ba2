use chrono::{TimeZone, Utc};
use entity::{post, project, user};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let seed_users = [
            ("Alice", "alice@example.com", "$2b$10$seeded-demo-hash-alice"),
            ("Bob", "bob@example.com", "$2b$10$seeded-demo-hash-bob"),
        ];

        let mut user_ids = Vec::new();
        for (name, email, password) in seed_users {
            let model = user::ActiveModel {
                name: Set(name.to_string()),
                email: Set(email.to_string()),
                password: Set(password.to_string()),
                ..Default::default()
            };
            user_ids.push(model.insert(db).await?.id);
        }

        let seed_posts = [
            (
                "First Post",
                "This is the first post on the blog.",
                Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
                user_ids[0],
            ),
            (
                "Second Post",
                "Another post, this time by Bob.",
                Utc.with_ymd_and_hms(2024, 1, 12, 14, 30, 0).unwrap(),
                user_ids[1],
            ),
        ];

        for (title, content, created_at, user_id) in seed_posts {
            let model = post::ActiveModel {
                title: Set(title.to_string()),
                content: Set(content.to_string()),
                created_at: Set(created_at),
                user_id: Set(user_id),
                ..Default::default()
            };
            model.insert(db).await?;
        }

        let seed_projects = [
            ("Blog engine", Some("The very blog you are reading."), user_ids[0]),
            ("Side project", None, user_ids[1]),
        ];

        for (name, description, user_id) in seed_projects {
            let model = project::ActiveModel {
                name: Set(name.to_string()),
                description: Set(description.map(str::to_string)),
                user_id: Set(user_id),
                ..Default::default()
            };
            model.insert(db).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let titles_to_delete = ["First Post", "Second Post"];
        post::Entity::delete_many()
            .filter(post::Column::Title.is_in(titles_to_delete))
            .exec(db)
            .await?;

        let names_to_delete = ["Blog engine", "Side project"];
        project::Entity::delete_many()
            .filter(project::Column::Name.is_in(names_to_delete))
            .exec(db)
            .await?;

        let emails_to_delete = ["alice@example.com", "bob@example.com"];
        user::Entity::delete_many()
            .filter(user::Column::Email.is_in(emails_to_delete))
            .exec(db)
            .await?;

        Ok(())
    }
}
