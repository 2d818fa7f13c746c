//! HTTP server for driving a game session.
//!
//! # Endpoints
//!
//! - `GET  /health`                : Liveness probe
//! - `POST /start_simulation`      : Reset and start a session
//! - `POST /continue_simulation`   : Play one round
//! - `GET  /state`                 : Session snapshot
//! - `GET|PUT /agents/:role/modifiers`: Behavior modifiers per agent

pub mod routes;

pub use routes::{app_router, AppState};
