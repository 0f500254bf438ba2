use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};

const SESSION_COOKIE_NAME: &str = "session";

#[derive(Serialize, Deserialize)]
struct SessionData {
    user_id: i32,
}

/// Request-scoped session state decoded from the session cookie. Always
/// extractable; a missing or unreadable cookie is an anonymous session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    pub user_id: Option<i32>,
}

impl Session {
    pub fn logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    fn from_cookies(cookies: &Cookies) -> Self {
        let user_id = cookies
            .get(SESSION_COOKIE_NAME)
            .and_then(|cookie| serde_json::from_str::<SessionData>(cookie.value()).ok())
            .map(|data| data.user_id);

        Self { user_id }
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state).await?;
        Ok(Session::from_cookies(&cookies))
    }
}

/// Extraction succeeds only for a logged-in session; anonymous requests
/// are redirected to the login page before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/login"))?;

        match session.user_id {
            Some(user_id) => Ok(AuthUser { user_id }),
            None => Err(Redirect::to("/login")),
        }
    }
}

/// Builds the session cookie for a logged-in user. The login write path
/// lives outside this slice; integration tests use this to mint sessions.
pub fn session_cookie(user_id: i32) -> Cookie<'static> {
    let payload =
        serde_json::to_string(&SessionData { user_id }).expect("session payload is serializable");
    Cookie::new(SESSION_COOKIE_NAME, payload)
}
