use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use adboard_core::gate::authorize;

use crate::dto::ErrorResponse;
use crate::state::AppState;

/// Middleware that admits only requests carrying a valid `Authorization: Bearer <token>`.
///
/// On success the [`AuthenticatedAdmin`](adboard_core::AuthenticatedAdmin) is
/// stored in the request extensions for handlers to pick up.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match authorize(header, &state.issuer) {
        Ok(admin) => {
            request.extensions_mut().insert(admin);
            next.run(request).await
        }
        Err(rejection) => {
            tracing::debug!(?rejection, "Access gate rejected request");
            (
                StatusCode::FORBIDDEN,
                axum::Json(ErrorResponse::new(rejection.message())),
            )
                .into_response()
        }
    }
}
