//! hp_server - HTTP service exposing hit point operations on players
//!
//! Routes resolve a player by name in the in-memory store, apply exactly
//! one hit point operation from `hp_core`, and return the updated state
//! snapshot.

pub mod manager;
pub mod routes;
pub mod settings;
pub mod store;
