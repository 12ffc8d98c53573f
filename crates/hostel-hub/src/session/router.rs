use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Role, Session};
use crate::error::json_error;

/// Router builder exposing the stubbed sign-in and the route guard.
pub fn session_router() -> Router {
    Router::new()
        .route("/api/v1/session", post(sign_in_handler))
        .route("/api/v1/access", get(access_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignInRequest {
    pub(crate) role: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignInResponse {
    #[serde(flatten)]
    pub(crate) session: Session,
    pub(crate) redirect_to: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccessQuery {
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) path: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AccessResponse {
    pub(crate) role: Role,
    pub(crate) path: String,
    pub(crate) allowed: bool,
    pub(crate) redirect_to: Option<&'static str>,
}

pub(crate) async fn sign_in_handler(Json(request): Json<SignInRequest>) -> Response {
    let role = match request.role.parse::<Role>() {
        Ok(role) => role,
        Err(error) => return json_error(StatusCode::BAD_REQUEST, error.to_string()),
    };

    let session = Session::sign_in(role, Utc::now());
    let redirect_to = session.landing_path();
    (
        StatusCode::OK,
        Json(SignInResponse {
            session,
            redirect_to,
        }),
    )
        .into_response()
}

pub(crate) async fn access_handler(Query(query): Query<AccessQuery>) -> Response {
    let role = match query.role.as_deref().map(str::parse::<Role>).transpose() {
        Ok(role) => role.unwrap_or_default(),
        Err(error) => return json_error(StatusCode::BAD_REQUEST, error.to_string()),
    };
    let Some(path) = query.path else {
        return json_error(StatusCode::BAD_REQUEST, "missing 'path' query parameter");
    };

    let access = super::authorize(role, &path);
    (
        StatusCode::OK,
        Json(AccessResponse {
            role,
            path,
            allowed: access.is_allowed(),
            redirect_to: access.redirect_target(),
        }),
    )
        .into_response()
}
