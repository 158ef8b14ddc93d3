//! Feature modules, one directory per domain area.
//!
//! Each module follows the same layout: `model` (entities and DTOs),
//! `service` (database and gateway logic), `controller` (axum handlers)
//! and `router` (route table). Modules without their own storage or logic
//! omit the files they do not need.

pub mod auth;
pub mod avatar;
pub mod events;
pub mod members;
pub mod notifications;
pub mod pages;
pub mod payments;
pub mod transliterate;
pub mod users;
