use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::service::AuthService;
use crate::modules::events::service::EventsService;
use crate::modules::members::service::MembersService;
use crate::modules::users::service::UsersService;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{DashboardPage, EventsPage, HomePage, MemberPage, PageInfo, StatesPage};

const HOME_UPCOMING_LIMIT: i64 = 5;

fn page(title: &str) -> Json<PageInfo> {
    Json(PageInfo {
        title: title.to_string(),
    })
}

#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, AppError> {
    let upcoming_events = EventsService::upcoming_events(&state.db, HOME_UPCOMING_LIMIT).await?;
    Ok(Json(HomePage {
        title: "Sahitya Parishad".to_string(),
        upcoming_events,
    }))
}

pub async fn login_page() -> Json<PageInfo> {
    page("Sign in")
}

pub async fn about_page() -> Json<PageInfo> {
    page("About the Parishad")
}

pub async fn gallery_images() -> Json<PageInfo> {
    page("Image gallery")
}

pub async fn gallery_videos() -> Json<PageInfo> {
    page("Video gallery")
}

pub async fn central_committee() -> Json<PageInfo> {
    page("Central committee")
}

#[instrument(skip(state))]
pub async fn states_page(State(state): State<AppState>) -> Result<Json<StatesPage>, AppError> {
    let states = MembersService::states_rollup(&state.db).await?;
    Ok(Json(StatesPage {
        title: "Members by state".to_string(),
        states,
    }))
}

#[instrument(skip(state))]
pub async fn events_page(State(state): State<AppState>) -> Result<Json<EventsPage>, AppError> {
    let events = EventsService::list_events(&state.db).await?;
    Ok(Json(EventsPage {
        title: "Events".to_string(),
        events,
    }))
}

/// The signed-in member's page. Anonymous visitors never get here; the
/// session guard has already redirected them to `/login`.
#[instrument(skip(state))]
pub async fn members_page(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MemberPage>, AppError> {
    let profile = AuthService::current_user(&state.db, user.id).await?;
    Ok(Json(MemberPage {
        title: "Member area".to_string(),
        profile,
    }))
}

/// Admin dashboard payload. The role gate is applied where this route is
/// mounted.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardPage>, AppError> {
    let stats = UsersService::admin_stats(&state.db).await?;
    Ok(Json(DashboardPage {
        title: "Dashboard".to_string(),
        stats,
    }))
}
