mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::create_test_member;
use http_body_util::BodyExt;
use sahitya::config::cors::CorsConfig;
use sahitya::config::rate_limit::RateLimitConfig;
use sahitya::config::razorpay;
use sahitya::config::session::SessionConfig;
use sahitya::config::site::SiteConfig;
use sahitya::router::init_router;
use sahitya::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        http: reqwest::Client::new(),
        session_config: SessionConfig::from_env(),
        razorpay_config: razorpay::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::default(),
        site_config: SiteConfig::from_env(),
    };
    init_router(state)
}

async fn get_members(app: axum::Router, uri: &str) -> serde_json::Value {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn seed_directory(pool: &PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_test_member(&mut tx, "Asha Kulkarni", "Pune", "Maharashtra", "India").await;
    create_test_member(&mut tx, "Ravi Deshpande", "Nagpur", "Maharashtra", "India").await;
    create_test_member(&mut tx, "Meera Hegde", "Hubli", "Karnataka", "India").await;
    create_test_member(&mut tx, "Sita Sharma", "Kathmandu", "Bagmati", "Nepal").await;
    tx.commit().await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_members_empty(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members").await;

    assert_eq!(body["data"], json!([]));
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["meta"]["has_more"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_members_alphabetical(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members").await;

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|member| member["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Asha Kulkarni",
            "Meera Hegde",
            "Ravi Deshpande",
            "Sita Sharma"
        ]
    );
    assert_eq!(body["meta"]["total"], 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_state_filter(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members?state=Maharashtra").await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    for member in data {
        assert_eq!(member["state"], "Maharashtra");
    }
    assert_eq!(body["meta"]["total"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_city_filter(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members?city=Pune").await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Asha Kulkarni");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_nation_filter(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members?nation=Nepal").await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Sita Sharma");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_filter_values_are_ignored(pool: PgPool) {
    // The search form submits empty strings for untouched fields
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members?state=&city=&nation=").await;

    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_combined_filters(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members?state=Maharashtra&city=Nagpur").await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Ravi Deshpande");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_members_pagination(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let body = get_members(app.clone(), "/api/members?limit=3").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["meta"]["total"], 4);
    assert_eq!(body["meta"]["limit"], 3);
    assert_eq!(body["meta"]["has_more"], true);

    let body = get_members(app, "/api/members?limit=3&offset=3").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    // Name order is stable, so the last page is the alphabetical tail
    assert_eq!(data[0]["name"], "Sita Sharma");
    assert_eq!(body["meta"]["has_more"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_states_rollup(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/api/members/states").await;

    let rollup = body.as_array().unwrap();
    assert_eq!(rollup.len(), 3);
    assert_eq!(rollup[0]["state"], "Bagmati");
    assert_eq!(rollup[0]["members"], 1);
    assert_eq!(rollup[1]["state"], "Karnataka");
    assert_eq!(rollup[1]["members"], 1);
    assert_eq!(rollup[2]["state"], "Maharashtra");
    assert_eq!(rollup[2]["members"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_states_page_carries_rollup(pool: PgPool) {
    seed_directory(&pool).await;
    let app = setup_test_app(pool.clone()).await;
    let body = get_members(app, "/states").await;

    assert_eq!(body["title"], "Members by state");
    assert_eq!(body["states"].as_array().unwrap().len(), 3);
}
