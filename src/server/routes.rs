//! Axum route handlers for the investment-game HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`               : `{"status": "ok", "version": ...}`
//! - `POST /start_simulation`     : Reset the session; optional `{"max_rounds": n}`
//! - `POST /continue_simulation`  : Play one round; optional persona overrides
//! - `GET  /state`                : Session snapshot
//! - `GET  /agents/:role/modifiers`: Current behavior modifiers for `am`/`mc`
//! - `PUT  /agents/:role/modifiers`: Replace them (malformed → neutral)

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::game::types::AgentRole;
use crate::session::{GameSession, RoundOptions, RoundOutcome, SessionSnapshot};

/// Shared application state for the HTTP server.
///
/// One session per process; the mutex serializes round advances.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<GameSession>>,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameSession::default())
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/start_simulation", post(start_handler))
        .route("/continue_simulation", post(continue_handler))
        .route("/state", get(state_handler))
        .route(
            "/agents/:role/modifiers",
            get(get_modifiers_handler).put(put_modifiers_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health: liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "investment-game",
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StartRequest {
    max_rounds: Option<u32>,
}

/// Empty bodies mean "all defaults".
fn parse_optional_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e)))
}

/// POST /start_simulation: reset the session.
async fn start_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let request: StartRequest = parse_optional_body(&body)?;
    let mut session = state.session.lock().await;
    let max_rounds = request
        .max_rounds
        .unwrap_or_else(|| session.config().max_rounds);
    session.reset_session(max_rounds);
    tracing::info!(session_id = %session.id(), max_rounds, "simulation started");
    Ok(Json(json!({
        "status": "started",
        "session_id": session.id(),
        "max_rounds": max_rounds,
    })))
}

/// POST /continue_simulation: play one round.
///
/// Body: optional `{"am_persona": "competitive", "mc_persona": null}`.
/// Returns 409 when no simulation has been started.
async fn continue_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoundOutcome>, ApiError> {
    let options: RoundOptions = parse_optional_body(&body)?;
    let mut session = state.session.lock().await;
    match session.advance_round_with(options).await {
        RoundOutcome::NotRunning => Err(api_error(
            StatusCode::CONFLICT,
            "No simulation running; POST /start_simulation first",
        )),
        outcome => Ok(Json(outcome)),
    }
}

/// GET /state: session snapshot.
async fn state_handler(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

fn parse_role(raw: &str) -> Result<AgentRole, ApiError> {
    raw.parse()
        .map_err(|e: crate::error::ParseRoleError| api_error(StatusCode::NOT_FOUND, e.to_string()))
}

/// GET /agents/:role/modifiers
async fn get_modifiers_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let role = parse_role(&role)?;
    let modifiers = state.session.lock().await.get_behavior_modifiers(role);
    Ok(Json(json!({ "role": role, "modifiers": modifiers })))
}

/// PUT /agents/:role/modifiers
///
/// Any body that is not a well-formed modifier object stores neutral
/// modifiers and reports `"substituted": true`.
async fn put_modifiers_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let role = parse_role(&role)?;
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let (modifiers, substituted) = state
        .session
        .lock()
        .await
        .set_behavior_modifiers_from_payload(role, &payload);
    if substituted {
        tracing::warn!(%role, "malformed modifier payload; stored neutral modifiers");
    }
    Ok(Json(json!({
        "role": role,
        "modifiers": modifiers,
        "substituted": substituted,
    })))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::config::EngineConfig;

    fn test_state() -> AppState {
        let config = EngineConfig {
            seed: Some(21),
            max_rounds: 3,
            ..EngineConfig::default()
        };
        AppState::new(GameSession::from_config(config).unwrap())
    }

    async fn send(state: &AppState, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, json) = send(&AppState::default(), "GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "investment-game");
    }

    #[tokio::test]
    async fn test_continue_before_start_conflicts() {
        let state = test_state();
        let (status, json) = send(&state, "POST", "/continue_simulation", "").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(json["error"].as_str().unwrap().contains("start_simulation"));
    }

    #[tokio::test]
    async fn test_full_simulation_over_http() {
        let state = test_state();
        let (status, json) = send(&state, "POST", "/start_simulation", r#"{"max_rounds": 2}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["max_rounds"], 2);

        for n in 1..=2 {
            let (status, json) = send(&state, "POST", "/continue_simulation", "").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["status"], "played");
            assert_eq!(json["record"]["round_number"], n);
            assert_eq!(json["history"].as_array().unwrap().len(), n as usize);
        }

        let (status, json) = send(&state, "POST", "/continue_simulation", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "complete");
        assert_eq!(json["history"].as_array().unwrap().len(), 2);

        let (_, snapshot) = send(&state, "GET", "/state", "").await;
        assert_eq!(snapshot["round"], 2);
        assert_eq!(snapshot["running"], true);
    }

    #[tokio::test]
    async fn test_start_uses_configured_rounds_when_body_empty() {
        let state = test_state();
        let (status, json) = send(&state, "POST", "/start_simulation", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["max_rounds"], 3);
    }

    #[tokio::test]
    async fn test_persona_override_over_http() {
        let state = test_state();
        send(&state, "POST", "/start_simulation", "").await;
        let (status, json) = send(
            &state,
            "POST",
            "/continue_simulation",
            r#"{"am_persona": "competitive"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["am_trace"]["persona"], "competitive");

        let (status, _) = send(
            &state,
            "POST",
            "/continue_simulation",
            r#"{"am_persona": "reckless"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_modifier_roundtrip() {
        let state = test_state();
        let body = r#"{"aggression": 2, "cooperation_bias": 0, "trust_factor": 0.5, "investment_shift": -3}"#;
        let (status, json) = send(&state, "PUT", "/agents/mc/modifiers", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["substituted"], false);

        let (status, json) = send(&state, "GET", "/agents/mc/modifiers", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["modifiers"]["aggression"], 2);
        assert_eq!(json["modifiers"]["trust_factor"], 0.5);
        assert_eq!(json["modifiers"]["investment_shift"], -3);
    }

    #[tokio::test]
    async fn test_malformed_modifiers_become_neutral() {
        let state = test_state();
        let (status, json) = send(&state, "PUT", "/agents/am/modifiers", "not json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["substituted"], true);
        assert_eq!(json["modifiers"]["trust_factor"], 1.0);

        let (_, json) = send(&state, "PUT", "/agents/am/modifiers", r#"{"mood": 3}"#).await;
        assert_eq!(json["substituted"], true);
    }

    #[tokio::test]
    async fn test_array_modifier_body_becomes_neutral() {
        let state = test_state();
        let (status, json) = send(&state, "PUT", "/agents/mc/modifiers", "[1, 2, 3]").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["substituted"], true);
        assert_eq!(json["modifiers"]["aggression"], 0);
        assert_eq!(json["modifiers"]["trust_factor"], 1.0);

        let (_, json) = send(&state, "GET", "/agents/mc/modifiers", "").await;
        assert_eq!(json["modifiers"]["cooperation_bias"], 0);
        assert_eq!(json["modifiers"]["trust_factor"], 1.0);
    }

    #[tokio::test]
    async fn test_unknown_role_not_found() {
        let state = test_state();
        let (status, _) = send(&state, "GET", "/agents/cfo/modifiers", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
