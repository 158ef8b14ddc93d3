use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationsResponse {
    pub notifications: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PushNotificationDto {
    #[validate(length(min = 1))]
    pub message: String,
}
