use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::role::{require_admin_api, require_admin_page};
use crate::middleware::session::session_guard;
use crate::modules::auth::router::init_auth_router;
use crate::modules::avatar::router::init_avatar_router;
use crate::modules::events::router::{init_admin_events_router, init_events_router};
use crate::modules::members::router::init_members_router;
use crate::modules::notifications::router::init_notifications_router;
use crate::modules::pages::controller::dashboard;
use crate::modules::pages::router::init_pages_router;
use crate::modules::payments::router::init_payments_router;
use crate::modules::transliterate::router::init_transliterate_router;
use crate::modules::users::controller::admin_stats;
use crate::modules::users::router::init_admin_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Router, middleware};
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    let auth_governor = Arc::new(state.rate_limit_config.auth_governor_config());
    let payment_governor = Arc::new(state.rate_limit_config.payment_governor_config());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_pages_router())
        .route(
            "/dashboard",
            get(dashboard).route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_admin_page,
            )),
        )
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/auth",
                    init_auth_router().route_layer(GovernorLayer::new(auth_governor)),
                )
                .nest(
                    "/razorpay",
                    init_payments_router().route_layer(GovernorLayer::new(payment_governor)),
                )
                .nest("/transliterate", init_transliterate_router())
                .nest("/avatar", init_avatar_router())
                .nest("/notifications", init_notifications_router())
                .nest("/events", init_events_router())
                .nest("/members", init_members_router())
                .nest(
                    "/admin",
                    Router::new()
                        .nest("/users", init_admin_users_router())
                        .nest("/events", init_admin_events_router())
                        .route("/stats", get(admin_stats))
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_admin_api,
                        )),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn_with_state(state, session_guard))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
}
