use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::auth::application::services::{
    FetchUserProfileService, LoginUserService, RegisterUserService, UpdateUserProfileService,
};
use crate::leaderboard::application::domain::entities::LeaderboardLimits;
use crate::leaderboard::application::services::GetLeaderboardService;
use crate::recycling::application::recycling_use_cases::RecyclingUseCases;
use crate::recycling::application::services::{GetUserStatsService, LogRecyclingService};
use crate::shared::api::custom_json_config;
use crate::tests::support::auth_helper::token_provider;
use crate::tests::support::in_memory_store::InMemoryUserStore;
use crate::tests::support::stubs::FakePasswordHasher;
use crate::AppState;

fn wired_state(store: &InMemoryUserStore) -> AppState {
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(FakePasswordHasher);

    AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                store.clone(),
                store.clone(),
                Arc::clone(&hasher),
                token_provider(),
            )),
            login: Arc::new(LoginUserService::new(
                store.clone(),
                Arc::clone(&hasher),
                token_provider(),
            )),
            fetch_profile: Arc::new(FetchUserProfileService::new(store.clone())),
            update_profile: Arc::new(UpdateUserProfileService::new(
                store.clone(),
                store.clone(),
                hasher,
            )),
        },
        recycling: RecyclingUseCases {
            log: Arc::new(LogRecyclingService::new(store.clone())),
            stats: Arc::new(GetUserStatsService::new(store.clone())),
        },
        leaderboard: Arc::new(GetLeaderboardService::new(
            store.clone(),
            LeaderboardLimits::default(),
        )),
    }
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(custom_json_config())
                .app_data(web::Data::new(wired_state($store)))
                .app_data(web::Data::new(token_provider()))
                .configure(crate::init_routes),
        )
        .await
    };
}

fn auth(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_register_log_and_rank() {
    let store = InMemoryUserStore::default();
    let app = app!(&store);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .set_json(json!({
            "username": "greenfan",
            "email": "greenfan@example.com",
            "password": "SecurePass123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert!(body["data"]["user"].get("passwordHash").is_none());
    assert!(body["data"]["user"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/v1/recycling/log")
        .insert_header(auth(&token))
        .set_json(json!({ "item_type": "plastic", "quantity": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/recycling/stats")
        .insert_header(auth(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["data"],
        json!({ "totalItemsRecycled": 5, "co2Saved": 2.5, "points": 50 })
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/users/leaderboard")
        .insert_header(auth(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["users"][0]["username"], "greenfan");
    assert_eq!(body["data"]["users"][0]["rank"], 1);
    assert_eq!(body["data"]["users"][0]["points"], 50);
}

#[actix_web::test]
async fn test_duplicate_registration_conflicts() {
    let store = InMemoryUserStore::default();
    let app = app!(&store);
    let payload = json!({
        "username": "greenfan",
        "email": "greenfan@example.com",
        "password": "SecurePass123"
    });

    let first = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    let second = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, second).await.status(),
        StatusCode::CONFLICT
    );
    assert_eq!(store.len(), 1);
}

#[actix_web::test]
async fn test_login_then_profile() {
    let store = InMemoryUserStore::default();
    let app = app!(&store);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .set_json(json!({
            "username": "greenfan",
            "email": "greenfan@example.com",
            "password": "SecurePass123"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let bad = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "greenfan@example.com", "password": "nope" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, bad).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let good = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "GreenFan@Example.com", "password": "SecurePass123" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, good).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let me = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(auth(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, me).await;
    assert_eq!(body["data"]["user"]["email"], "greenfan@example.com");
    assert_eq!(body["data"]["user"]["points"], 0);
}

#[actix_web::test]
async fn test_protected_routes_reject_missing_token() {
    let store = InMemoryUserStore::default();
    let app = app!(&store);

    for (method, uri) in [
        ("GET", "/api/v1/users/me"),
        ("PUT", "/api/v1/users/profile"),
        ("POST", "/api/v1/users/logout"),
        ("GET", "/api/v1/users/leaderboard"),
        ("POST", "/api/v1/recycling/log"),
        ("GET", "/api/v1/recycling/stats"),
    ] {
        let req = match method {
            "GET" => test::TestRequest::get(),
            "PUT" => test::TestRequest::put(),
            _ => test::TestRequest::post(),
        }
        .uri(uri)
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[actix_web::test]
async fn test_malformed_json_gets_envelope() {
    let store = InMemoryUserStore::default();
    let app = app!(&store);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
}
