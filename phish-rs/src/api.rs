//! HTTP API - health and prediction endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::inference::{InferenceContext, Label};

/// Shared application state
pub struct AppState {
    /// Loaded artifact pair, or None when startup loading failed
    pub inference: Option<InferenceContext>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Label,
    pub status: &'static str,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// API Server
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(inference: Option<InferenceContext>, addr: String) -> Self {
        let state = Arc::new(AppState { inference });
        Self { state, addr }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Build the service router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET / - Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "running",
        model_loaded: state.inference.is_some(),
    })
}

/// POST /predict - classify raw email text
pub async fn predict(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    // The body is parsed by hand so malformed JSON gets the same fixed
    // error message as a missing field.
    let email_content = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|payload| {
            payload
                .get("email_content")
                .and_then(|v| v.as_str())
                .map(str::to_string)
        });

    let email_content = match email_content {
        Some(content) => content,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Missing 'email_content' field")),
            )
                .into_response()
        }
    };

    let context = match &state.inference {
        Some(context) => context,
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Model or vectorizer not loaded")),
            )
                .into_response()
        }
    };

    match context.classify(&email_content) {
        Ok(label) => (
            StatusCode::OK,
            Json(PredictResponse {
                prediction: label,
                status: "success",
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Prediction error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Prediction failed")),
            )
                .into_response()
        }
    }
}
