use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A sammelan, workshop or reading hosted by the organisation.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Event plus its registration count, for the detail endpoint.
#[derive(Serialize, Debug, ToSchema)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub participants: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub event_id: Uuid,
    pub registered: bool,
}
