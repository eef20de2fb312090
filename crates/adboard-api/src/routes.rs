use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use adboard_core::{AppError, AuthenticatedAdmin};
use adboard_core::models::NewAd;

use crate::auth::require_admin;
use crate::dto::{
    AdListResponse, AdResponse, CreateAdRequest, CreateAdResponse, CredentialsRequest,
    HealthResponse, LoginResponse, MessageResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Largest request body accepted. Larger bodies fail JSON extraction and
/// are answered with the usual error envelope.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/api/admin/ads", get(list_ads).post(create_ad))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let public = Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/seed", post(seed))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public
        .merge(protected)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::dto::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::dto::ErrorResponse),
    ),
    tag = "admin"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A body we cannot read is treated like bad credentials.
    let Ok(Json(body)) = body else {
        return Err(AppError::Unauthorized.into());
    };

    let issued = state
        .admin
        .login(&state.issuer, &body.email, &body.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        token: issued.token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/seed",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Admin created", body = MessageResponse),
        (status = 400, description = "Admin exists or fields missing", body = crate::dto::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::dto::ErrorResponse),
    ),
    tag = "admin"
)]
pub async fn seed(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;

    let account = state
        .admin
        .seed(&body.email, &body.password)
        .await
        .map_err(ApiError::context("Failed to create admin"))?;

    tracing::warn!(admin_id = %account.id, "Admin account created through the seed endpoint");

    Ok(Json(MessageResponse::ok("Admin created successfully")))
}

// ---------------------------------------------------------------------------
// Ads
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/admin/ads",
    responses(
        (status = 200, description = "All ads", body = AdListResponse),
        (status = 403, description = "Missing or invalid token", body = crate::dto::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "ads"
)]
pub async fn list_ads(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let ads = state
        .ads
        .list()
        .await
        .map_err(ApiError::context("Failed to fetch ads"))?;

    Ok(Json(AdListResponse {
        success: true,
        ads: ads.into_iter().map(AdResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/ads",
    request_body = CreateAdRequest,
    responses(
        (status = 200, description = "Ad created", body = CreateAdResponse),
        (status = 400, description = "Missing field", body = crate::dto::ErrorResponse),
        (status = 403, description = "Missing or invalid token", body = crate::dto::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "ads"
)]
pub async fn create_ad(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    body: Result<Json<CreateAdRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let new_ad = NewAd::from(body);

    let ad = state
        .ads
        .create(&new_ad)
        .await
        .map_err(ApiError::context("Failed to create ad"))?;

    tracing::info!(ad_id = %ad.id, admin_id = %admin.admin_id, "Ad created");

    Ok(Json(CreateAdResponse {
        success: true,
        message: "Ad created successfully".to_string(),
        ad: AdResponse::from(ad),
    }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let healthy = state.db.ad_repo().health_check().await.is_ok();

    let (status, response) = if healthy {
        (
            StatusCode::OK,
            HealthResponse {
                status: "healthy",
                database: "ok",
            },
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthResponse {
                status: "unhealthy",
                database: "error",
            },
        )
    };

    (status, Json(response))
}
