//! Configuration modules for the Sahitya API.
//!
//! Each submodule owns one aspect of configuration, typically loaded from
//! environment variables at startup.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`rate_limit`]: API rate limiting configuration
//! - [`razorpay`]: Razorpay gateway credentials
//! - [`session`]: Session token configuration (cookie names, JWT settings)
//! - [`site`]: Upstream service endpoints and polling cadence
//!
//! # Environment Variables
//!
//! Most configuration is loaded from environment variables. See each
//! submodule for specific variable names and their defaults.

pub mod cors;
pub mod database;
pub mod rate_limit;
pub mod razorpay;
pub mod session;
pub mod site;
