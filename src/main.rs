pub mod api;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::feed;
pub use modules::moderation;
pub mod health;

use crate::auth::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
use crate::auth::adapter::outgoing::account_repository_postgres::AccountRepositoryPostgres;
use crate::auth::adapter::outgoing::account_store_memory::AccountStoreMemory;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_memory::MemoryTokenBlacklist;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::application::domain::entities::{Account, Role};
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, PasswordHasher, TokenBlacklistRepository, TokenProvider,
};
use crate::auth::application::use_cases::{
    fetch_current_account::{FetchCurrentAccountUseCase, IFetchCurrentAccountUseCase},
    login_account::{ILoginAccountUseCase, LoginAccountUseCase},
    logout_account::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_account::{IRegisterAccountUseCase, RegisterAccountUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use crate::feed::adapter::outgoing::feed_event_tracing::TracingFeedEventPublisher;
use crate::feed::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::feed::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::feed::adapter::outgoing::post_store_memory::PostStoreMemory;
use crate::feed::application::ports::outgoing::{FeedEventPublisher, PostQuery, PostRepository};
use crate::feed::application::use_cases::{
    create_post::{CreatePostUseCase, ICreatePostUseCase},
    list_feed::{IListFeedUseCase, ListFeedUseCase},
    list_profile_posts::{IListProfilePostsUseCase, ListProfilePostsUseCase},
    react_to_post::{IReactToPostUseCase, ReactToPostUseCase},
};

use crate::moderation::application::domain::ApprovalPolicy;
use crate::moderation::application::use_cases::{
    delete_post::{DeletePostUseCase, IDeletePostUseCase},
    fetch_dashboard_stats::{FetchDashboardStatsUseCase, IFetchDashboardStatsUseCase},
    list_accounts::{IListAccountsUseCase, ListAccountsUseCase},
    list_all_posts::{IListAllPostsUseCase, ListAllPostsUseCase},
    toggle_account_active::{IToggleAccountActiveUseCase, ToggleAccountActiveUseCase},
    toggle_post_approval::{ITogglePostApprovalUseCase, TogglePostApprovalUseCase},
};

use actix_web::{web, App, HttpServer};
use chrono::Utc;
use deadpool_redis::{Config as RedisConfig, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_account_use_case: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    pub login_account_use_case: Arc<dyn ILoginAccountUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub fetch_current_account_use_case: Arc<dyn IFetchCurrentAccountUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub create_post_use_case: Arc<dyn ICreatePostUseCase + Send + Sync>,
    pub list_feed_use_case: Arc<dyn IListFeedUseCase + Send + Sync>,
    pub list_profile_posts_use_case: Arc<dyn IListProfilePostsUseCase + Send + Sync>,
    pub react_to_post_use_case: Arc<dyn IReactToPostUseCase + Send + Sync>,
    pub toggle_post_approval_use_case: Arc<dyn ITogglePostApprovalUseCase + Send + Sync>,
    pub delete_post_use_case: Arc<dyn IDeletePostUseCase + Send + Sync>,
    pub toggle_account_active_use_case: Arc<dyn IToggleAccountActiveUseCase + Send + Sync>,
    pub fetch_dashboard_stats_use_case: Arc<dyn IFetchDashboardStatsUseCase + Send + Sync>,
    pub list_accounts_use_case: Arc<dyn IListAccountsUseCase + Send + Sync>,
    pub list_all_posts_use_case: Arc<dyn IListAllPostsUseCase + Send + Sync>,
}

/// Wire every use case against one set of adapters. Generic so the
/// Postgres and in-memory backends share the exact same wiring.
#[allow(clippy::too_many_arguments)]
fn build_app_state<AQ, AR, PQ, PR, B>(
    account_query: AQ,
    account_repository: AR,
    post_query: PQ,
    post_repository: PR,
    blacklist: B,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    events: Arc<dyn FeedEventPublisher>,
    policy: ApprovalPolicy,
) -> AppState
where
    AQ: AccountQuery + Clone + Send + Sync + 'static,
    AR: AccountRepository + Clone + Send + Sync + 'static,
    PQ: PostQuery + Clone + Send + Sync + 'static,
    PR: PostRepository + Clone + Send + Sync + 'static,
    B: TokenBlacklistRepository + Clone + Send + Sync + 'static,
{
    AppState {
        register_account_use_case: Arc::new(RegisterAccountUseCase::new(
            account_query.clone(),
            account_repository.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&tokens),
        )),
        login_account_use_case: Arc::new(LoginAccountUseCase::new(
            account_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&tokens),
        )),
        logout_use_case: Arc::new(LogoutUseCase::new(blacklist.clone(), Arc::clone(&tokens))),
        refresh_token_use_case: Arc::new(RefreshTokenUseCase::new(
            blacklist,
            Arc::clone(&tokens),
        )),
        fetch_current_account_use_case: Arc::new(FetchCurrentAccountUseCase::new(
            account_query.clone(),
        )),
        update_profile_use_case: Arc::new(UpdateProfileUseCase::new(
            account_repository.clone(),
        )),
        create_post_use_case: Arc::new(CreatePostUseCase::new(
            account_query.clone(),
            post_repository.clone(),
            Arc::clone(&events),
            policy,
        )),
        list_feed_use_case: Arc::new(ListFeedUseCase::new(
            account_query.clone(),
            post_query.clone(),
        )),
        list_profile_posts_use_case: Arc::new(ListProfilePostsUseCase::new(
            account_query.clone(),
            post_query.clone(),
        )),
        react_to_post_use_case: Arc::new(ReactToPostUseCase::new(
            account_query.clone(),
            post_repository.clone(),
            Arc::clone(&events),
        )),
        toggle_post_approval_use_case: Arc::new(TogglePostApprovalUseCase::new(
            account_query.clone(),
            post_repository.clone(),
        )),
        delete_post_use_case: Arc::new(DeletePostUseCase::new(
            account_query.clone(),
            post_repository,
        )),
        toggle_account_active_use_case: Arc::new(ToggleAccountActiveUseCase::new(
            account_query.clone(),
            account_repository,
        )),
        fetch_dashboard_stats_use_case: Arc::new(FetchDashboardStatsUseCase::new(
            account_query.clone(),
            post_query.clone(),
        )),
        list_accounts_use_case: Arc::new(ListAccountsUseCase::new(account_query.clone())),
        list_all_posts_use_case: Arc::new(ListAllPostsUseCase::new(account_query, post_query)),
    }
}

/// Make sure an admin account exists. The roster starts empty, and the
/// role is only ever assigned at creation, so without this nobody could
/// moderate anything.
async fn ensure_admin_account<Q, R>(
    query: &Q,
    repository: &R,
    password_hasher: &Arc<dyn PasswordHasher>,
) -> anyhow::Result<()>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let username = username.trim().to_lowercase();

    let password = match env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.trim().is_empty() => password,
        _ => {
            tracing::warn!("ADMIN_PASSWORD not set; skipping admin bootstrap");
            return Ok(());
        }
    };

    if query
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .is_some()
    {
        return Ok(());
    }

    let email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@aura.social".to_string());
    let password_hash = password_hasher
        .hash_password(password.trim())
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let admin = Account {
        id: Uuid::new_v4(),
        username: username.clone(),
        email,
        password_hash,
        display_name: "Aura Administrator".to_string(),
        bio: "Platform Administrator".to_string(),
        avatar: "👑".to_string(),
        role: Role::Admin,
        is_active: true,
        joined_at: Utc::now(),
    };

    repository
        .create_account(admin)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    info!(username = %username, "Admin account bootstrapped");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading: .env.{environment} first, then .env
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let policy = ApprovalPolicy::from_env();
    info!(?policy, "Moderation policy loaded");

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let events: Arc<dyn FeedEventPublisher> = Arc::new(TracingFeedEventPublisher::new());
    let tokens_for_state: Arc<dyn TokenProvider> = token_provider_arc.clone();

    let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "postgres".to_string());

    // Readiness probes only get backends that actually exist.
    let mut db_for_probe: Option<Arc<sea_orm::DatabaseConnection>> = None;
    let mut redis_for_probe: Option<Arc<deadpool_redis::Pool>> = None;

    let state = if backend == "memory" {
        info!("Using in-memory storage backend");

        let accounts = AccountStoreMemory::new();
        let posts = PostStoreMemory::new();
        let blacklist = MemoryTokenBlacklist::new();

        ensure_admin_account(&accounts, &accounts, &password_hasher)
            .await
            .expect("Failed to bootstrap admin account");

        build_app_state(
            accounts.clone(),
            accounts,
            posts.clone(),
            posts,
            blacklist,
            password_hasher,
            tokens_for_state,
            events,
            policy,
        )
    } else {
        let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
        let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

        let mut opt = ConnectOptions::new(db_url);
        opt.max_connections(50)
            .min_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .expect("Failed to connect to database");
        let db_arc = Arc::new(conn);

        let redis_pool = RedisConfig::from_url(&redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .expect("Failed to create Redis pool");
        let redis_arc = Arc::new(redis_pool);

        db_for_probe = Some(Arc::clone(&db_arc));
        redis_for_probe = Some(Arc::clone(&redis_arc));

        let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
        let account_repository = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
        let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
        let post_repository = PostRepositoryPostgres::new(Arc::clone(&db_arc));
        let blacklist = RedisTokenBlacklist::new(redis_arc);

        ensure_admin_account(&account_query, &account_repository, &password_hasher)
            .await
            .expect("Failed to bootstrap admin account");

        build_app_state(
            account_query,
            account_repository,
            post_query,
            post_repository,
            blacklist,
            password_hasher,
            tokens_for_state,
            events,
            policy,
        )
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            );

        if let Some(db) = &db_for_probe {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }
        if let Some(redis) = &redis_for_probe {
            app = app.app_data(web::Data::new(Arc::clone(redis)));
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    // Feed
    cfg.service(crate::feed::adapter::incoming::web::routes::list_feed_handler);
    cfg.service(crate::feed::adapter::incoming::web::routes::list_profile_posts_handler);
    cfg.service(crate::feed::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::feed::adapter::incoming::web::routes::react_to_post_handler);
    // Admin
    cfg.service(crate::moderation::adapter::incoming::web::routes::dashboard_stats_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::list_accounts_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::list_all_posts_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::toggle_post_approval_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::delete_post_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::toggle_account_active_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
