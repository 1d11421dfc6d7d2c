use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::{
    cookie::SameSite, session_store::ExpiredDeletion, Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserOutcome,
    service::user::UserService,
};

/// How often expired sessions are purged from the store.
const EXPIRED_SESSION_SWEEP: Duration = Duration::from_secs(60 * 10);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the `user`, `message` and
/// `projects` tables exist before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite file as the application tables. A background task
/// purges expired sessions periodically.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SessionStoreErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let sweeper = session_store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EXPIRED_SESSION_SWEEP);
        loop {
            interval.tick().await;
            if let Err(e) = sweeper.delete_expired().await {
                tracing::error!("Failed to delete expired sessions: {}", e);
            }
        }
    });

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.session_inactivity_minutes,
        )));

    Ok(session)
}

/// Creates the configured bootstrap account unless a user with that name exists.
///
/// # Returns
/// - `Ok(())` - Account exists or nothing is configured
/// - `Err(AppError)` - Database or hashing error
pub async fn ensure_admin_user(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = config.admin.as_ref() else {
        return Ok(());
    };

    if UserRepository::new(db)
        .find_credentials_by_name(&admin.user_name)
        .await?
        .is_some()
    {
        tracing::debug!("Bootstrap user {} already exists", admin.user_name);
        return Ok(());
    }

    match UserService::new(db)
        .create(&admin.user_name, &admin.password)
        .await?
    {
        CreateUserOutcome::Created(user) => {
            tracing::info!("Created bootstrap user {}", user.user_name)
        }
        outcome => tracing::warn!("Bootstrap user not created: {:?}", outcome),
    }

    Ok(())
}
