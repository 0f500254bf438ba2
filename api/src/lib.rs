mod error;
mod session;

use std::str::FromStr;
use std::{env, net::SocketAddr};

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use blog_service::sea_orm::{Database, DatabaseConnection};
use blog_service::Query;
use migration::{Migrator, MigratorTrait};
use tera::Tera;
use tower_cookies::CookieManagerLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

pub use error::ApiError;
pub use session::{session_cookie, AuthUser, Session};

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    dotenvy::dotenv().ok();
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    let conn = Database::connect(db_url)
        .await
        .expect("Database connection failed");
    Migrator::up(&conn, None).await?;

    let templates = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("Tera initialization failed");

    let state = AppState { templates, conn };
    let app = create_app(state);

    let addr = SocketAddr::from_str(&server_url)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Clone)]
pub struct AppState {
    pub templates: Tera,
    pub conn: DatabaseConnection,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_posts))
        .route("/blog/{id}", get(show_post))
        .route("/profile", get(profile))
        .route("/login", get(login))
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn list_posts(state: State<AppState>, session: Session) -> Result<Html<String>, ApiError> {
    let posts = Query::list_posts_with_authors(&state.conn).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("posts", &posts);
    ctx.insert("logged_in", &session.logged_in());

    let body = state.templates.render("homepage.html.tera", &ctx)?;

    Ok(Html(body))
}

async fn show_post(
    state: State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> Result<Html<String>, ApiError> {
    let post = Query::find_post_with_author(&state.conn, id)
        .await?
        .ok_or(ApiError::PostNotFound(id))?;

    let mut ctx = tera::Context::new();
    ctx.insert("post", &post);
    ctx.insert("logged_in", &session.logged_in());

    let body = state.templates.render("blog.html.tera", &ctx)?;

    Ok(Html(body))
}

async fn profile(state: State<AppState>, user: AuthUser) -> Result<Html<String>, ApiError> {
    let profile = Query::find_user_profile(&state.conn, user.user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let mut ctx = tera::Context::new();
    ctx.insert("user", &profile);
    ctx.insert("logged_in", &true);

    let body = state.templates.render("profile.html.tera", &ctx)?;

    Ok(Html(body))
}

async fn login(state: State<AppState>, session: Session) -> Result<Response, ApiError> {
    if session.logged_in() {
        return Ok(Redirect::to("/profile").into_response());
    }

    let mut ctx = tera::Context::new();
    ctx.insert("logged_in", &false);

    let body = state.templates.render("login.html.tera", &ctx)?;

    Ok(Html(body).into_response())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        println!("Error: {err}");
    }
}
