use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::config::session::SESSION_COOKIE;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto};
use crate::modules::events::model::{CreateEventDto, Event, EventDetail, RegistrationResponse};
use crate::modules::members::model::{
    Member, MemberFilterParams, PaginatedMembersResponse, StateSummary,
};
use crate::modules::notifications::model::{NotificationsResponse, PushNotificationDto};
use crate::modules::payments::model::{CreateOrderDto, VerifyPaymentDto, VerifyResponse};
use crate::modules::transliterate::model::{TransliterateRequest, TransliterateResponse};
use crate::modules::users::model::{
    PaginatedUsersResponse, StatsResponse, UpdatePlanDto, UpdateRoleDto, User, UserFilterParams,
    UserPlan, UserRole,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::me,
        crate::modules::payments::controller::create_order,
        crate::modules::payments::controller::verify_payment,
        crate::modules::transliterate::controller::transliterate,
        crate::modules::avatar::controller::avatar,
        crate::modules::notifications::controller::my_notifications,
        crate::modules::notifications::controller::push_notification,
        crate::modules::events::controller::list_events,
        crate::modules::events::controller::get_event,
        crate::modules::events::controller::register_for_event,
        crate::modules::events::controller::create_event,
        crate::modules::members::controller::list_members,
        crate::modules::members::controller::states_rollup,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::update_role,
        crate::modules::users::controller::update_plan,
        crate::modules::users::controller::admin_stats,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserPlan,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            CreateOrderDto,
            VerifyPaymentDto,
            VerifyResponse,
            TransliterateRequest,
            TransliterateResponse,
            NotificationsResponse,
            PushNotificationDto,
            Event,
            EventDetail,
            CreateEventDto,
            RegistrationResponse,
            Member,
            MemberFilterParams,
            PaginatedMembersResponse,
            StateSummary,
            UserFilterParams,
            PaginatedUsersResponse,
            UpdateRoleDto,
            UpdatePlanDto,
            StatsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Session management endpoints"),
        (name = "Payments", description = "Razorpay order and verification endpoints"),
        (name = "Transliterate", description = "Latin-to-Devanagari transliteration"),
        (name = "Avatar", description = "Profile picture proxy"),
        (name = "Notifications", description = "Member notification endpoints"),
        (name = "Events", description = "Event listing and registration"),
        (name = "Members", description = "Member directory"),
        (name = "Admin", description = "Administrator endpoints")
    ),
    info(
        title = "Sahitya API",
        version = "0.1.0",
        description = "Backend for the Sahitya Parishad membership portal: session-based auth, Razorpay payments, events, the member directory and transliteration.",
        contact(
            name = "API Support",
            email = "support@sahityaparishad.org"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
            )
        }
    }
}
