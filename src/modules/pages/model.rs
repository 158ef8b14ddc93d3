use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::events::model::Event;
use crate::modules::members::model::StateSummary;
use crate::modules::users::model::{StatsResponse, User};

/// Minimal payload for pages the frontend renders from static content.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageInfo {
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomePage {
    pub title: String,
    pub upcoming_events: Vec<Event>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatesPage {
    pub title: String,
    pub states: Vec<StateSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventsPage {
    pub title: String,
    pub events: Vec<Event>,
}

/// The signed-in member's page, with their own profile.
#[derive(Debug, Serialize, ToSchema)]
pub struct MemberPage {
    pub title: String,
    pub profile: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardPage {
    pub title: String,
    pub stats: StatsResponse,
}
