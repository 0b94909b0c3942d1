pub mod modules;
pub use modules::auth;
pub use modules::leaderboard;
pub use modules::recycling;

pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, LegacyAwareHasher};
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    FetchUserProfileService, LoginUserService, RegisterUserService, UpdateUserProfileService,
};
use crate::config::AppConfig;
use crate::leaderboard::adapter::outgoing::LeaderboardQueryPostgres;
use crate::leaderboard::application::ports::incoming::use_cases::GetLeaderboardUseCase;
use crate::leaderboard::application::services::GetLeaderboardService;
use crate::recycling::adapter::outgoing::UserStatsRepositoryPostgres;
use crate::recycling::application::recycling_use_cases::RecyclingUseCases;
use crate::recycling::application::services::{GetUserStatsService, LogRecyclingService};
use crate::shared::api::{build_cors, custom_json_config};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub recycling: RecyclingUseCases,
    pub leaderboard: Arc<dyn GetLeaderboardUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        io::Error::other(e.to_string())
    })?;
    info!(environment = %config.environment, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        io::Error::other(e.to_string())
    })?;

    if config.database.run_migrations {
        Migrator::up(&conn, None).await.map_err(|e| {
            error!(error = %e, "Migrations failed");
            io::Error::other(e.to_string())
        })?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let argon2 = Argon2Hasher::new(&config.argon2).map_err(|e| io::Error::other(e.to_string()))?;
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(LegacyAwareHasher::new(argon2));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let stats_repo = UserStatsRepositoryPostgres::new(Arc::clone(&db_arc));
    let leaderboard_query = LeaderboardQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            login: Arc::new(LoginUserService::new(
                user_query.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            fetch_profile: Arc::new(FetchUserProfileService::new(user_query.clone())),
            update_profile: Arc::new(UpdateUserProfileService::new(
                user_query,
                user_repo,
                Arc::clone(&password_hasher),
            )),
        },
        recycling: RecyclingUseCases {
            log: Arc::new(LogRecyclingService::new(stats_repo.clone())),
            stats: Arc::new(GetUserStatsService::new(stats_repo)),
        },
        leaderboard: Arc::new(GetLeaderboardService::new(
            leaderboard_query,
            config.leaderboard,
        )),
    };

    let server_url = config.server_url();
    let cors_origin = config.cors_origin.clone();
    info!(%server_url, %cors_origin, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_origin))
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::health::service_info);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::leaderboard::adapter::incoming::web::routes::get_leaderboard_handler);
    // Recycling
    cfg.service(crate::recycling::adapter::incoming::web::routes::log_recycling_handler);
    cfg.service(crate::recycling::adapter::incoming::web::routes::get_user_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
