//! HTTP transport implementation.
//!
//! HTTP server carrying `{method, params}` messages over POST requests.
//! This allows standard HTTP clients (curl, hosted runtimes, etc.) to
//! communicate with the MCP server. Supported methods are `tools/list` and
//! `tools/call`; tool results come back as the same content-blocks/isError
//! envelope the STDIO transport produces.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Incoming MCP-over-HTTP request body.
#[derive(Debug, Clone, Deserialize)]
pub struct McpRequest {
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    /// The MCP server instance.
    server: McpServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState { server };

        // Build router
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_mcp))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → MCP:    POST {}", self.config.rpc_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Resolves when the operator interrupts the process.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install interrupt handler: {}", e);
        return;
    }
    info!("Interrupt received - shutting down");
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "endpoints": {
            "health": "/health",
            "mcp": "/mcp (POST)"
        },
        "documentation": "Send POST requests to /mcp with MCP protocol messages"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle MCP requests.
#[instrument(skip_all, fields(method))]
async fn handle_mcp(
    State(state): State<AppState>,
    Json(request): Json<McpRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received MCP request: {}", request.method);

    match request.method.as_str() {
        "tools/list" => {
            let tools = state.server.list_tools();
            (StatusCode::OK, Json(serde_json::json!({ "tools": tools })))
        }

        "tools/call" => handle_tools_call(&state, request.params).await,

        _ => {
            warn!("Invalid method: {}", request.method);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Invalid method" })),
            )
        }
    }
}

/// Handle a tools/call request.
async fn handle_tools_call(
    state: &AppState,
    params: Option<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let params = match params {
        Some(p) => p,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing params" })),
            );
        }
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing tool name" })),
            );
        }
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let result = state.server.call_tool(&name, arguments).await;
    (StatusCode::OK, Json(result))
}
