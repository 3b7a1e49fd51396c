//! HTTP API v1: terminal sessions and the catalogue.
//!
//! Endpoints:
//!
//! - `GET  /v1/commands`                     - Trigger list and quick commands
//! - `GET  /v1/sessions`                     - List sessions
//! - `POST /v1/sessions`                     - Create a session
//! - `GET  /v1/sessions/{id}`                - Transcript, memory panel, display state
//! - `POST /v1/sessions/{id}/commands`       - Submit input, get the response
//! - `POST /v1/sessions/{id}/view/terminal`  - Return to the terminal view
//! - `GET  /v1/sessions/{id}/events`         - SSE stream of the session's events
//! - `GET  /v1/projects`                     - Project cards (`?category=`)
//! - `GET  /v1/projects/{id}`                - One project
//! - `GET  /v1/skills`                       - Skill levels and summary

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_stream::StreamExt;
use tracing::{info, warn};

use aadinet_catalog::{CategoryFilter, PowerTier, Project, Skill, SkillSummary};
use aadinet_core::action::{ActionKind, CommandEntry, DisplayState};
use aadinet_core::error::SessionError;
use aadinet_core::event::{DomainEvent, EventBus};
use aadinet_core::memory::MemoryPanel;
use aadinet_core::message::Message;
use aadinet_resolver::{CommandResolver, QuickCommand, quick_commands};
use aadinet_session::TerminalSession;

// ── State ─────────────────────────────────────────────────────────────────

/// Shared state for the v1 API.
pub struct ApiV1State {
    pub config: aadinet_config::AppConfig,
    pub resolver: Arc<CommandResolver>,
    pub event_bus: Arc<EventBus>,
    pub sessions: RwLock<HashMap<String, Arc<TerminalSession>>>,
}

pub type SharedApiState = Arc<ApiV1State>;

impl ApiV1State {
    pub fn new(config: aadinet_config::AppConfig) -> Self {
        let resolver = CommandResolver::new().with_delay(aadinet_resolver::delay::from_millis(
            config.terminal.processing_delay_ms,
        ));
        Self {
            config,
            resolver: Arc::new(resolver),
            event_bus: Arc::new(EventBus::default()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    async fn session(&self, id: &str) -> Result<Arc<TerminalSession>, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }
}

// ── Router ────────────────────────────────────────────────────────────────

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/commands", get(list_commands_handler))
        .route("/sessions", get(list_sessions_handler))
        .route("/sessions", post(create_session_handler))
        .route("/sessions/{id}", get(get_session_handler))
        .route("/sessions/{id}/commands", post(submit_command_handler))
        .route("/sessions/{id}/view/terminal", post(return_to_terminal_handler))
        .route("/sessions/{id}/events", get(session_events_handler))
        .route("/projects", get(list_projects_handler))
        .route("/projects/{id}", get(get_project_handler))
        .route("/skills", get(list_skills_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

impl From<SessionError> for ErrorStatus {
    fn from(e: SessionError) -> Self {
        let status = match &e {
            SessionError::EmptyInput => StatusCode::BAD_REQUEST,
            SessionError::NotFound(_) => StatusCode::NOT_FOUND,
            SessionError::Busy(_) => StatusCode::CONFLICT,
            SessionError::Memory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ErrorStatus(error_response(status, e.to_string()))
    }
}

/// Wrapper so `?` can turn a [`SessionError`] into an HTTP error.
struct ErrorStatus(ApiError);

impl axum::response::IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        self.0.into_response()
    }
}

#[derive(Serialize, Deserialize)]
struct CommandListResponse {
    commands: Vec<CommandDto>,
    quick_commands: Vec<QuickCommandDto>,
}

#[derive(Serialize, Deserialize)]
struct CommandDto {
    trigger: String,
    action: ActionKind,
}

impl From<&CommandEntry> for CommandDto {
    fn from(entry: &CommandEntry) -> Self {
        Self {
            trigger: entry.trigger.to_string(),
            action: entry.action,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct QuickCommandDto {
    label: String,
    command: String,
}

impl From<&QuickCommand> for QuickCommandDto {
    fn from(quick: &QuickCommand) -> Self {
        Self {
            label: quick.label.to_string(),
            command: quick.command.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CreateSessionResponse {
    id: String,
    created_at: String,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
struct SessionSummaryDto {
    id: String,
    created_at: String,
    message_count: usize,
    display: DisplayState,
}

#[derive(Serialize, Deserialize)]
struct SessionListResponse {
    sessions: Vec<SessionSummaryDto>,
}

#[derive(Serialize, Deserialize)]
struct SessionDetailResponse {
    id: String,
    created_at: String,
    messages: Vec<Message>,
    memory: MemoryPanel,
    display: DisplayState,
    busy: bool,
}

#[derive(Deserialize)]
struct SubmitCommandRequest {
    input: String,
}

#[derive(Serialize, Deserialize)]
struct SubmitCommandResponse {
    message: String,
    action: ActionKind,
    display: DisplayState,
}

#[derive(Deserialize)]
struct ProjectsQuery {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Serialize)]
struct ProjectListResponse {
    count: usize,
    projects: Vec<&'static Project>,
}

#[derive(Serialize)]
struct SkillDto {
    #[serde(flatten)]
    skill: &'static Skill,
    tier: PowerTier,
}

#[derive(Serialize)]
struct SkillListResponse {
    skills: Vec<SkillDto>,
    summary: SkillSummary,
}

// ── Commands ──────────────────────────────────────────────────────────────

async fn list_commands_handler(State(state): State<SharedApiState>) -> Json<CommandListResponse> {
    Json(CommandListResponse {
        commands: state.resolver.table().entries().iter().map(CommandDto::from).collect(),
        quick_commands: quick_commands().iter().map(QuickCommandDto::from).collect(),
    })
}

// ── Sessions ──────────────────────────────────────────────────────────────

async fn list_sessions_handler(State(state): State<SharedApiState>) -> Json<SessionListResponse> {
    let mut sessions: Vec<Arc<TerminalSession>> =
        state.sessions.read().await.values().cloned().collect();
    sessions.sort_by_key(|s| std::cmp::Reverse(s.created_at()));

    let mut summaries = Vec::with_capacity(sessions.len());
    for session in sessions {
        summaries.push(SessionSummaryDto {
            id: session.id().to_string(),
            created_at: session.created_at().to_rfc3339(),
            message_count: session.message_count().await,
            display: session.display(),
        });
    }

    Json(SessionListResponse {
        sessions: summaries,
    })
}

async fn create_session_handler(
    State(state): State<SharedApiState>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), ErrorStatus> {
    let session = Arc::new(TerminalSession::from_config(
        &state.config,
        state.resolver.clone(),
        state.event_bus.clone(),
    )?);
    let id = session.id().to_string();

    {
        let mut sessions = state.sessions.write().await;

        // Evict oldest if at capacity
        if sessions.len() >= state.config.gateway.max_sessions {
            if let Some(oldest_key) = sessions
                .iter()
                .min_by_key(|(_, s)| s.created_at())
                .map(|(k, _)| k.clone())
            {
                sessions.remove(&oldest_key);
                info!(session_id = %oldest_key, "Evicted oldest session");
            }
        }

        sessions.insert(id.clone(), session.clone());
    }

    info!(session_id = %id, "Session created");

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            id,
            created_at: session.created_at().to_rfc3339(),
            messages: session.transcript().await,
        }),
    ))
}

async fn get_session_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<Json<SessionDetailResponse>, ErrorStatus> {
    let session = state.session(&id).await?;

    Ok(Json(SessionDetailResponse {
        id,
        created_at: session.created_at().to_rfc3339(),
        messages: session.transcript().await,
        memory: session.memory_panel().await?,
        display: session.display(),
        busy: session.is_busy(),
    }))
}

async fn submit_command_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
    Json(payload): Json<SubmitCommandRequest>,
) -> Result<Json<SubmitCommandResponse>, ErrorStatus> {
    let session = state.session(&id).await?;

    let response = session.submit(&payload.input).await.inspect_err(|e| {
        warn!(session_id = %id, error = %e, "Command rejected");
    })?;

    Ok(Json(SubmitCommandResponse {
        message: response.message,
        action: response.action,
        display: session.display(),
    }))
}

async fn return_to_terminal_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<Json<DisplayState>, ErrorStatus> {
    let session = state.session(&id).await?;
    session.return_to_terminal();
    Ok(Json(session.display()))
}

/// `GET /v1/sessions/{id}/events`: SSE stream of one session's domain events.
async fn session_events_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<Sse<impl futures::Stream<Item = Result<SseEvent, Infallible>>>, ErrorStatus> {
    state.session(&id).await?;

    let rx = state.event_bus.subscribe();
    let stream = tokio_stream::wrappers::BroadcastStream::new(rx)
        .filter_map(|result| result.ok())
        .filter(move |event| event.session_id() == Some(id.as_str()))
        .map(|event| {
            let data = serde_json::to_string(event.as_ref()).unwrap_or_default();
            let event_name = match event.as_ref() {
                DomainEvent::CommandReceived { .. } => "command_received",
                DomainEvent::ResponseGenerated { .. } => "response_generated",
                DomainEvent::ViewChanged { .. } => "view_changed",
                DomainEvent::ChaosModeChanged { .. } => "chaos_mode_changed",
                DomainEvent::ErrorOccurred { .. } => "error_occurred",
            };
            Ok(SseEvent::default().event(event_name).data(data))
        });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

// ── Catalogue ─────────────────────────────────────────────────────────────

async fn list_projects_handler(
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?,
    };

    let projects: Vec<_> = aadinet_catalog::by_category(filter).collect();
    Ok(Json(ProjectListResponse {
        count: projects.len(),
        projects,
    }))
}

async fn get_project_handler(Path(id): Path<String>) -> Result<Json<&'static Project>, ApiError> {
    aadinet_catalog::find(&id)
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Project not found: {id}")))
}

async fn list_skills_handler() -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: aadinet_catalog::skills()
            .iter()
            .map(|skill| SkillDto {
                skill,
                tier: skill.tier(),
            })
            .collect(),
        summary: aadinet_catalog::summary(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aadinet_core::action::View;
    use aadinet_core::message::Role;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_api_state() -> SharedApiState {
        let mut config = aadinet_config::AppConfig::default();
        config.terminal.processing_delay_ms = 0;
        Arc::new(ApiV1State::new(config))
    }

    async fn json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create_session(state: &SharedApiState) -> String {
        let req = Request::builder()
            .method("POST")
            .uri("/sessions")
            .body(Body::empty())
            .unwrap();
        let response = v1_router(state.clone()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json::<CreateSessionResponse>(response).await.id
    }

    fn submit(id: &str, input: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/sessions/{id}/commands"))
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "input": input }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_commands() {
        let app = v1_router(test_api_state());
        let req = Request::builder().uri("/commands").body(Body::empty()).unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let list: CommandListResponse = json(response).await;
        assert_eq!(list.commands.len(), 9);
        assert!(
            list.commands
                .iter()
                .any(|c| c.trigger == "chaos" && c.action == ActionKind::ChaosMode)
        );
        assert_eq!(list.quick_commands.len(), 4);
        assert_eq!(list.quick_commands[0].command, "show --projects");
    }

    #[tokio::test]
    async fn create_and_list_sessions() {
        let state = test_api_state();

        let req = Request::builder()
            .method("POST")
            .uri("/sessions")
            .body(Body::empty())
            .unwrap();
        let response = v1_router(state.clone()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: CreateSessionResponse = json(response).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.messages.len(), 2);
        assert_eq!(created.messages[0].role, Role::System);

        let req = Request::builder().uri("/sessions").body(Body::empty()).unwrap();
        let response = v1_router(state.clone()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let list: SessionListResponse = json(response).await;
        assert_eq!(list.sessions.len(), 1);
        assert_eq!(list.sessions[0].id, created.id);
        assert_eq!(list.sessions[0].message_count, 2);
    }

    #[tokio::test]
    async fn get_session_not_found() {
        let app = v1_router(test_api_state());
        let req = Request::builder()
            .uri("/sessions/nonexistent")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn submit_help_and_read_back_session() {
        let state = test_api_state();
        let id = create_session(&state).await;

        let response = v1_router(state.clone()).oneshot(submit(&id, "HELP")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let result: SubmitCommandResponse = json(response).await;
        assert!(result.message.contains("show --projects"));
        assert_eq!(result.action, ActionKind::None);

        let req = Request::builder()
            .uri(format!("/sessions/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = v1_router(state.clone()).oneshot(req).await.unwrap();
        let detail: SessionDetailResponse = json(response).await;
        assert_eq!(detail.messages.len(), 4);
        assert_eq!(detail.memory.total, 1);
        assert_eq!(detail.memory.recent, vec!["HELP"]);
        assert!(!detail.busy);
    }

    #[tokio::test]
    async fn chaos_reports_display_state() {
        let state = test_api_state();
        let id = create_session(&state).await;

        let response = v1_router(state.clone()).oneshot(submit(&id, "chaos")).await.unwrap();
        let result: SubmitCommandResponse = json(response).await;
        assert_eq!(result.action, ActionKind::ChaosMode);
        assert!(result.display.chaos_mode);
    }

    #[tokio::test]
    async fn blank_input_is_bad_request() {
        let state = test_api_state();
        let id = create_session(&state).await;

        let response = v1_router(state.clone()).oneshot(submit(&id, "  ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json(response).await;
        assert!(error.error.contains("empty"));
    }

    #[tokio::test]
    async fn submit_to_unknown_session_is_not_found() {
        let app = v1_router(test_api_state());
        let response = app.oneshot(submit("missing", "help")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn return_to_terminal_resets_view() {
        let state = test_api_state();
        let id = create_session(&state).await;

        v1_router(state.clone())
            .oneshot(submit(&id, "analyze --skills"))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(600)).await;
        assert_eq!(state.session(&id).await.unwrap().display().view, View::Skills);

        let req = Request::builder()
            .method("POST")
            .uri(format!("/sessions/{id}/view/terminal"))
            .body(Body::empty())
            .unwrap();
        let response = v1_router(state.clone()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let display: DisplayState = json(response).await;
        assert_eq!(display.view, View::Terminal);
    }

    #[tokio::test]
    async fn session_cap_evicts_oldest() {
        let mut config = aadinet_config::AppConfig::default();
        config.gateway.max_sessions = 2;
        let state = Arc::new(ApiV1State::new(config));

        let first = create_session(&state).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        create_session(&state).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        create_session(&state).await;

        let sessions = state.sessions.read().await;
        assert_eq!(sessions.len(), 2);
        assert!(!sessions.contains_key(&first));
    }

    #[tokio::test]
    async fn events_for_unknown_session_is_not_found() {
        let app = v1_router(test_api_state());
        let req = Request::builder()
            .uri("/sessions/missing/events")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn events_stream_is_server_sent() {
        let state = test_api_state();
        let id = create_session(&state).await;
        let req = Request::builder()
            .uri(format!("/sessions/{id}/events"))
            .body(Body::empty())
            .unwrap();
        let response = v1_router(state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/event-stream"
        );
    }

    #[tokio::test]
    async fn list_projects_with_filter() {
        let app = v1_router(test_api_state());
        let req = Request::builder()
            .uri("/projects?category=NLP")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = json(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["projects"][0]["id"], "sentiment-analyzer");

        let req = Request::builder().uri("/projects").body(Body::empty()).unwrap();
        let response = v1_router(test_api_state()).oneshot(req).await.unwrap();
        let body: serde_json::Value = json(response).await;
        assert_eq!(body["count"], 8);
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request() {
        let app = v1_router(test_api_state());
        let req = Request::builder()
            .uri("/projects?category=Quantum")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_project_by_id() {
        let req = Request::builder()
            .uri("/projects/campus-gpt")
            .body(Body::empty())
            .unwrap();
        let response = v1_router(test_api_state()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = json(response).await;
        assert_eq!(body["name"], "Campus GPT");

        let req = Request::builder()
            .uri("/projects/nope")
            .body(Body::empty())
            .unwrap();
        let response = v1_router(test_api_state()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_skills_with_tiers() {
        let req = Request::builder().uri("/skills").body(Body::empty()).unwrap();
        let response = v1_router(test_api_state()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = json(response).await;
        assert_eq!(body["skills"].as_array().unwrap().len(), 8);
        assert_eq!(body["skills"][0]["name"], "Machine Learning");
        assert_eq!(body["skills"][0]["tier"], "Expert");
        assert_eq!(body["summary"]["peak"], 100);
    }
}
