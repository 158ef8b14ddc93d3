//! Middleware modules for request processing.
//!
//! Cross-cutting concerns live here: session resolution, the authenticated
//! user extractor, and the admin gates.
//!
//! # Session Flow
//!
//! 1. The client carries two cookies, an access token and a refresh token
//! 2. [`session::session_guard`] resolves them into a [`auth::CurrentUser`]
//!    request extension, minting fresh cookies when only the refresh token
//!    is still valid
//! 3. Browser routes outside the public allow-list redirect to `/login`
//!    when no identity could be resolved; API routes decide per handler
//! 4. [`role::require_admin_api`] and [`role::require_admin_page`] guard the
//!    admin surfaces, reading the role from the database on every request

pub mod auth;
pub mod role;
pub mod session;
