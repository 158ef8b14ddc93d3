pub mod controller;
pub mod router;

pub use router::init_avatar_router;
