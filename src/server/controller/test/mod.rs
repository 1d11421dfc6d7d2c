//! Route-level tests driving the full router with a database-backed session layer.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, Response, StatusCode,
    },
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::Config, router::router, service::user::UserService, startup::connect_to_session,
    state::AppState,
};

mod contact;

/// Router wired to an in-memory database and a temporary upload directory.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    upload_dir: TempDir,
    // Owns the database the router talks to.
    _context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_env(&[]).await
    }

    /// Builds the app with extra environment variables on top of the test database
    /// and upload directory.
    async fn with_env(vars: &[(&str, &str)]) -> Self {
        let mut context = TestBuilder::new()
            .with_portfolio_tables()
            .build()
            .await
            .unwrap();
        let db = context.database().await.unwrap().clone();

        let upload_dir = tempfile::tempdir().unwrap();
        let upload_path = upload_dir.path().join("images");
        let config = Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "UPLOAD_DIR" => Some(upload_path.display().to_string()),
            _ => vars
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string()),
        })
        .unwrap();

        let session = connect_to_session(&db, &config).await.unwrap();
        let router = router(&config)
            .with_state(AppState::new(db.clone(), config.upload_dir.clone()))
            .layer(session);

        Self {
            router,
            db,
            upload_dir,
            _context: context,
        }
    }

    fn images_dir(&self) -> std::path::PathBuf {
        self.upload_dir.path().join("images")
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request("GET", uri, cookie).body(Body::empty()).unwrap())
            .await
    }

    async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(
            request("POST", uri, cookie)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Creates an account with a real password hash.
    async fn create_account(&self, user_name: &str, password: &str) {
        UserService::new(&self.db)
            .create(user_name, password)
            .await
            .unwrap();
    }

    /// Logs in and returns the session cookie of the signed-in session.
    async fn login(&self, user_name: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/login",
                &format!("username={}&password={}", user_name, password),
                None,
            )
            .await;
        assert_eq!(location(&response), Some("/dashboard"));

        session_cookie(&response).unwrap()
    }

    /// Creates an account and returns a cookie for a session signed in as it.
    async fn signed_in(&self) -> String {
        self.create_account("admin", "secret").await;
        self.login("admin", "secret").await
    }

    async fn count<E>(&self, _entity: E) -> u64
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        E::find().count(&self.db).await.unwrap()
    }
}

fn request(method: &str, uri: &str, cookie: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match cookie {
        Some(cookie) => builder.header(COOKIE, cookie),
        None => builder,
    }
}

/// `name=value` pair of the last session cookie set by the response.
fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .last()
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), Some(to));
}
