//! API models shared by the HTTP layer and its clients.
//!
//! Every type here is serialized as camelCase JSON, the wire format the club's web frontend
//! already consumes.

pub mod admin;
pub mod api;
pub mod game;
pub mod log;
pub mod player;
pub mod season;
pub mod upcoming;
