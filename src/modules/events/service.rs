use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::metrics::track_event_registration;
use crate::utils::errors::AppError;

use super::model::{CreateEventDto, Event, EventDetail};

const EVENT_COLUMNS: &str = "id, title, description, venue, starts_at, created_at, updated_at";

pub struct EventsService;

impl EventsService {
    /// All events, soonest first.
    pub async fn list_events(db: &PgPool) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY starts_at ASC"
        ))
        .fetch_all(db)
        .await?;

        Ok(events)
    }

    /// Events that have not started yet, for the home page.
    pub async fn upcoming_events(db: &PgPool, limit: i64) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE starts_at >= now()
             ORDER BY starts_at ASC
             LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(db)
        .await?;

        Ok(events)
    }

    #[instrument(skip(db))]
    pub async fn get_event(db: &PgPool, event_id: Uuid) -> Result<EventDetail, AppError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(event_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Event {} not found", event_id)))?;

        let participants = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM event_participants WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(db)
        .await?;

        Ok(EventDetail {
            event,
            participants,
        })
    }

    /// Registers a user for an event. Registering twice is rejected rather
    /// than ignored so the frontend can tell the user.
    #[instrument(skip(db))]
    pub async fn register(db: &PgPool, event_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM events WHERE id = $1")
            .bind(event_id)
            .fetch_optional(db)
            .await?;

        if exists.is_none() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Event {} not found",
                event_id
            )));
        }

        let result = sqlx::query(
            "INSERT INTO event_participants (event_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (event_id, user_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(user_id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Already registered for this event"
            )));
        }

        track_event_registration();

        Ok(())
    }

    #[instrument(skip(db, dto), fields(title = %dto.title))]
    pub async fn create_event(db: &PgPool, dto: CreateEventDto) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (title, description, venue, starts_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.venue)
        .bind(dto.starts_at)
        .fetch_one(db)
        .await?;

        Ok(event)
    }
}
