use crate::error::PlannerError;
use crate::models::chat::ChatRequest;
use crate::models::plan::ProjectPlan;
use crate::planner::Planner;
use std::error::Error;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::{ HeaderValue, StatusCode },
};
use serde::Serialize;
use serde_json::{ json, Value };
use tower_http::cors::{ AllowHeaders, AllowMethods, AllowOrigin, CorsLayer };
use log::info;

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let code = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (code, Json(ErrorResponse { detail: self.to_string() })).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self { planner: Arc::new(planner) }
    }
}

/// Explicit origin allow-list; credentials are allowed so wildcards are not.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, Box<dyn Error + Send + Sync>> {
    let origins = origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err("Wildcard CORS origin cannot be combined with credentials".to_string());
            }
            HeaderValue::from_str(origin).map_err(|e| format!("Invalid CORS origin '{}': {}", origin, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    )
}

pub fn build_router(
    state: AppState,
    cors_origins: &[String],
) -> Result<Router, Box<dyn Error + Send + Sync>> {
    let cors = cors_layer(cors_origins)?;

    Ok(
        Router::new()
            .route("/", get(root_handler))
            .route("/api/generate-plan", post(generate_plan_handler))
            .layer(cors)
            .with_state(state)
    )
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Project Planner API is running" }))
}

async fn generate_plan_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ProjectPlan>, PlannerError> {
    let Json(request) = payload.map_err(|rejection| {
        info!("Malformed plan request body: {}", rejection.body_text());
        PlannerError::Validation(rejection.body_text())
    })?;

    let plan = state.planner.generate_plan(&request).await?;
    Ok(Json(plan))
}
