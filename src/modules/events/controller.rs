use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateEventDto, Event, EventDetail, RegistrationResponse};
use super::service::EventsService;

/// List all events
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events, soonest first", body = Vec<Event>)
    ),
    tag = "Events"
)]
#[instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = EventsService::list_events(&state.db).await?;
    Ok(Json(events))
}

/// Event details with registration count
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    responses(
        (status = 200, description = "Event with participant count", body = EventDetail),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "Events"
)]
#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventDetail>, AppError> {
    let detail = EventsService::get_event(&state.db, event_id).await?;
    Ok(Json(detail))
}

/// Register the signed-in user for an event
#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    responses(
        (status = 200, description = "Registered", body = RegistrationResponse),
        (status = 400, description = "Already registered", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Events"
)]
#[instrument(skip(state))]
pub async fn register_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    user: CurrentUser,
) -> Result<Json<RegistrationResponse>, AppError> {
    EventsService::register(&state.db, event_id, user.id).await?;
    Ok(Json(RegistrationResponse {
        event_id,
        registered: true,
    }))
}

/// Create an event (admin)
#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 403, description = "Administrator access required", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEventDto>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = EventsService::create_event(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
