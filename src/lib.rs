//! Web Music API backend.
//!
//! An HTTP gateway over the YouTube Music catalog: each endpoint attempts a
//! provider lookup and, where the fallback policy defines one, substitutes
//! static data when the provider is unavailable. Also serves the static
//! front-end in front of the `/api` surface.

pub mod controllers;
pub mod fallback;
pub mod models;
pub mod providers;
pub mod routers;
pub mod secrets;
