mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use common::{create_test_event, create_test_user, generate_unique_email};
use http_body_util::BodyExt;
use sahitya::config::cors::CorsConfig;
use sahitya::config::rate_limit::RateLimitConfig;
use sahitya::config::razorpay;
use sahitya::config::session::SessionConfig;
use sahitya::config::site::SiteConfig;
use sahitya::modules::users::model::UserRole;
use sahitya::router::init_router;
use sahitya::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

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

async fn get_session_cookies(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.7")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::to_string)
        .collect();

    cookies.join("; ")
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_events_empty(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_events_soonest_first(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_test_event(&mut tx, "Kavya Goshti", 5).await;
    create_test_event(&mut tx, "Granth Vimochan", 1).await;
    create_test_event(&mut tx, "Varshik Sammelan", 10).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Granth Vimochan", "Kavya Goshti", "Varshik Sammelan"]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_event_with_participant_count(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let event_id = create_test_event(&mut tx, "Kavya Goshti", 5).await;
    let user = create_test_user(
        &mut tx,
        &generate_unique_email(),
        "pw123456",
        UserRole::Ordinary,
    )
    .await;
    sqlx::query("INSERT INTO event_participants (event_id, user_id) VALUES ($1, $2)")
        .bind(event_id)
        .bind(user.id)
        .execute(&mut *tx)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/events/{event_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["title"], "Kavya Goshti");
    assert_eq!(body["participants"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_unknown_event(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/events/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_requires_session(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let event_id = create_test_event(&mut tx, "Kavya Goshti", 5).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/events/{event_id}/register"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_for_event(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let event_id = create_test_event(&mut tx, "Kavya Goshti", 5).await;
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "testpass123", UserRole::Ordinary).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let cookies = get_session_cookies(app, &email, "testpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/events/{event_id}/register"))
        .header("cookie", cookies)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["event_id"], event_id.to_string());
    assert_eq!(body["registered"], true);

    // The registration shows up in the event detail
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/events/{event_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["participants"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_twice_is_rejected(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let event_id = create_test_event(&mut tx, "Kavya Goshti", 5).await;
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "testpass123", UserRole::Ordinary).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let cookies = get_session_cookies(app, &email, "testpass123").await;

    let app = setup_test_app(pool.clone()).await;
    for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/events/{event_id}/register"))
            .header("cookie", cookies.clone())
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_unknown_event(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "testpass123", UserRole::Ordinary).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let cookies = get_session_cookies(app, &email, "testpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/events/{}/register", Uuid::new_v4()))
        .header("cookie", cookies)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_event_requires_admin(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "testpass123", UserRole::Ordinary).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let cookies = get_session_cookies(app, &email, "testpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/events")
        .header("content-type", "application/json")
        .header("cookie", cookies)
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Kavya Goshti",
                "starts_at": (Utc::now() + Duration::days(30)).to_rfc3339()
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_event_as_admin(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin_email = generate_unique_email();
    create_test_user(&mut tx, &admin_email, "testpass123", UserRole::Admin).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let cookies = get_session_cookies(app, &admin_email, "testpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/events")
        .header("content-type", "application/json")
        .header("cookie", cookies)
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Varshik Sammelan",
                "description": "Annual gathering",
                "venue": "Nagpur",
                "starts_at": (Utc::now() + Duration::days(30)).to_rfc3339()
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["title"], "Varshik Sammelan");
    assert_eq!(body["venue"], "Nagpur");
    assert!(body["id"].is_string());

    // And it shows up on the public list
    let request = Request::builder()
        .method("GET")
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_event_rejects_empty_title(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin_email = generate_unique_email();
    create_test_user(&mut tx, &admin_email, "testpass123", UserRole::Admin).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let cookies = get_session_cookies(app, &admin_email, "testpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/events")
        .header("content-type", "application/json")
        .header("cookie", cookies)
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "",
                "starts_at": (Utc::now() + Duration::days(30)).to_rfc3339()
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_events_page_is_public(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_test_event(&mut tx, "Kavya Goshti", 5).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    // No session cookie: the events page must answer, not redirect
    let request = Request::builder()
        .method("GET")
        .uri("/events")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["title"], "Events");
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_home_page_lists_only_upcoming_events(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_test_event(&mut tx, "Past Goshti", -5).await;
    create_test_event(&mut tx, "Future Sammelan", 5).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let titles: Vec<&str> = body["upcoming_events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Future Sammelan"]);
}
