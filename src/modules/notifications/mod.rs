pub mod controller;
pub mod model;
pub mod poller;
pub mod router;
pub mod service;

pub use model::*;
pub use poller::{NotificationFeed, NotificationPoller};
pub use router::init_notifications_router;
