use entity::{post, project, user};
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{DbConn, DbErr, EntityTrait, QueryOrder};
use serde::Serialize;

/// A blog post joined with its author's name. Nothing else of the author
/// leaves the data layer through this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostWithAuthor {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTimeUtc,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Profile view of a user with their projects. Deliberately has no
/// password field; this is the only shape in which a user is handed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub projects: Vec<ProjectSummary>,
}

pub struct Query;

impl Query {
    /// All posts, newest first, each with its author eagerly loaded.
    pub async fn list_posts_with_authors(db: &DbConn) -> Result<Vec<PostWithAuthor>, DbErr> {
        let rows = post::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(post, author)| post_view(post, author))
            .collect()
    }

    pub async fn find_post_with_author(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<PostWithAuthor>, DbErr> {
        let row = post::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;

        row.map(|(post, author)| post_view(post, author)).transpose()
    }

    pub async fn find_user_profile(db: &DbConn, id: i32) -> Result<Option<UserProfile>, DbErr> {
        let mut rows = user::Entity::find_by_id(id)
            .find_with_related(project::Entity)
            .all(db)
            .await?;

        Ok(rows.pop().map(|(user, projects)| UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            projects: projects
                .into_iter()
                .map(|project| ProjectSummary {
                    id: project.id,
                    name: project.name,
                    description: project.description,
                })
                .collect(),
        }))
    }
}

fn post_view(post: post::Model, author: Option<user::Model>) -> Result<PostWithAuthor, DbErr> {
    // The schema guarantees an author row; a missing one means the join
    // went through dangling data.
    let author = author
        .ok_or_else(|| DbErr::RecordNotFound(format!("author of post {} not found", post.id)))?;

    Ok(PostWithAuthor {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        author: author.name,
    })
}
