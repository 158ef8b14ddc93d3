use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    about_page, central_committee, events_page, gallery_images, gallery_videos, home, login_page,
    members_page, states_page,
};

/// Browser page payloads. `/members` relies on the session guard sending
/// anonymous visitors to `/login`; `/dashboard` is mounted separately with
/// the admin gate.
pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page))
        .route("/about", get(about_page))
        .route("/states", get(states_page))
        .route("/events", get(events_page))
        .route("/gallery/images", get(gallery_images))
        .route("/gallery/videos", get(gallery_videos))
        .route("/central-committee", get(central_committee))
        .route("/members", get(members_page))
}
